use clap::Parser;
use flowstat::graph::{EdgeDefinition, NodeDefinition, WorkflowGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate random workflow graphs for flowstat
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Number of nodes to generate
    #[arg(short, long, default_value_t = 12)]
    nodes: usize,

    /// Probability that any forward pair of nodes is connected
    #[arg(short = 'p', long, default_value_t = 0.2)]
    edge_probability: f64,

    /// Number of back edges to add, each of which closes a cycle
    #[arg(long, default_value_t = 0)]
    cycles: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

// Middle-of-graph node types, one per category where possible.
const NODE_TYPES: [&str; 10] = [
    "openai.text.ChatCompletion",
    "huggingface.text_to_image.Flux",
    "nodetool.video.FrameToVideo",
    "elevenlabs.audio.TextToSpeech",
    "nodetool.text.Concat",
    "nodetool.control.If",
    "nodetool.math.Add",
    "nodetool.data.Filter",
    "nodetool.agents.Agent",
    "lib.transform.Reshape",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.edge_probability) {
        eprintln!(
            "Error: --edge-probability ({}) must be between 0 and 1",
            cli.edge_probability
        );
        std::process::exit(1);
    }
    if cli.cycles > 0 && cli.nodes < 2 {
        eprintln!("Error: --cycles needs at least 2 nodes");
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating workflow with {} node(s), edge probability {}...",
        cli.nodes, cli.edge_probability
    );

    let nodes = generate_nodes(&mut rng, cli.nodes);
    let mut edges = generate_forward_edges(&mut rng, &nodes, cli.edge_probability);
    println!("-> Generated {} forward edge(s).", edges.len());

    for _ in 0..cli.cycles {
        let from = rng.random_range(1..nodes.len());
        let to = rng.random_range(0..from);
        edges.push(EdgeDefinition::new(&nodes[from].id, &nodes[to].id));
    }
    if cli.cycles > 0 {
        println!("-> Added {} back edge(s).", cli.cycles);
    }

    let graph = WorkflowGraph::new(nodes, edges);
    let json_output = serde_json::to_string_pretty(&graph)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow to '{}'",
        cli.output
    );

    Ok(())
}

/// First node is an input, last is an output, the rest are drawn from `NODE_TYPES`.
fn generate_nodes(rng: &mut StdRng, count: usize) -> Vec<NodeDefinition> {
    (0..count)
        .map(|i| {
            let node_type = if i == 0 {
                "nodetool.input.StringInput"
            } else if i + 1 == count {
                "nodetool.output.StringOutput"
            } else {
                NODE_TYPES[rng.random_range(0..NODE_TYPES.len())]
            };
            NodeDefinition::new(format!("node_{:03}", i), node_type)
        })
        .collect()
}

/// Only connects lower to higher indices, so the result is acyclic.
fn generate_forward_edges(
    rng: &mut StdRng,
    nodes: &[NodeDefinition],
    probability: f64,
) -> Vec<EdgeDefinition> {
    let mut edges = Vec::new();
    for (i, source) in nodes.iter().enumerate() {
        for target in &nodes[i + 1..] {
            if rng.random_bool(probability) {
                edges.push(EdgeDefinition::new(&source.id, &target.id));
            }
        }
    }
    edges
}
