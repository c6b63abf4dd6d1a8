use clap::{Parser, ValueEnum};
use flowstat::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These match the editor's saved workflow files and are only used here for conversion.

/// A saved editor document: `{ "name": ..., "graph": { nodes, edges } }`.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    name: Option<String>,
    graph: RawGraph,
}

#[derive(Deserialize)]
struct RawGraph {
    #[serde(default)]
    nodes: Vec<RawNode>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    #[serde(rename = "type", alias = "nodeType", default)]
    node_type: Option<String>,
    #[serde(default)]
    data: Option<RawNodeData>,
}

#[derive(Deserialize)]
struct RawNodeData {
    #[serde(alias = "nodeType", default)]
    node_type: Option<String>,
}

#[derive(Deserialize)]
struct RawEdge {
    source: String,
    target: String,
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Text,
    Json,
}

// --- Converter Implementation ---

/// Parses a workflow file. An object with a `graph` key is a wrapped document
/// and must parse as one; anything else is read as a bare graph.
fn parse_document(json: &str) -> std::result::Result<(Option<String>, RawGraph), String> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
    let Some(object) = value.as_object() else {
        return Err("expected a JSON object at the top level".to_string());
    };

    if object.contains_key("graph") {
        let document: RawDocument =
            serde_json::from_value(value).map_err(|e| format!("invalid wrapped document: {}", e))?;
        return Ok((document.name, document.graph));
    }

    if !object.contains_key("nodes") && !object.contains_key("edges") {
        tracing::warn!("document has neither `graph` nor `nodes`/`edges`; reading it as an empty graph");
    }
    let graph: RawGraph = serde_json::from_value(value).map_err(|e| format!("invalid graph: {}", e))?;
    Ok((None, graph))
}

impl IntoGraph for RawGraph {
    fn into_graph(self) -> std::result::Result<WorkflowGraph, GraphConversionError> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for raw_node in self.nodes {
            if raw_node.id.is_empty() {
                return Err(GraphConversionError::ValidationError(
                    "node with an empty id".to_string(),
                ));
            }
            let node_type = raw_node
                .node_type
                .or_else(|| raw_node.data.and_then(|d| d.node_type))
                .unwrap_or_default();
            nodes.push(NodeDefinition::new(raw_node.id, node_type));
        }

        let edges = self
            .edges
            .into_iter()
            .map(|raw_edge| EdgeDefinition::new(raw_edge.source, raw_edge.target))
            .collect();

        Ok(WorkflowGraph::new(nodes, edges))
    }
}

/// Structural statistics and health checks for workflow graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Paths to workflow JSON files
    #[arg(required = true)]
    paths: Vec<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatCli::Text)]
    format: FormatCli,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Keep edges that reference unknown nodes instead of dropping them
    #[arg(long)]
    lenient: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let policy = if cli.lenient {
        EdgePolicy::Lenient
    } else {
        EdgePolicy::Strict
    };
    let analyzer = WorkflowAnalyzer::builder().edge_policy(policy).build();

    let total_start = Instant::now();
    let mut analysis_total = Duration::ZERO;
    for path in &cli.paths {
        analysis_total += run_analysis(&analyzer, path, cli.format, cli.pretty);
    }

    if matches!(cli.format, FormatCli::Text) {
        println!("\n--- Performance Summary ---");
        println!("Files analyzed:       {}", cli.paths.len());
        println!("Analysis:             {:?}", analysis_total);
        println!("Total Execution:      {:?}", total_start.elapsed());
        println!("Edge Policy:          {:?}", policy);
    }
}

/// Loads, converts and analyzes one file, printing its report. Returns the
/// time spent in analysis alone.
fn run_analysis(analyzer: &WorkflowAnalyzer, path: &str, format: FormatCli, pretty: bool) -> Duration {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read workflow file '{}': {}", path, e)));
    let (name, raw_graph) = parse_document(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON '{}': {}", path, e)));
    let title = name.unwrap_or_else(|| path.to_string());
    let graph = raw_graph
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert '{}': {}", path, e)));

    let analysis_start = Instant::now();
    let stats = analyzer.analyze(&graph);
    let analysis_duration = analysis_start.elapsed();

    match format {
        FormatCli::Text => println!("{}", ReportFormatter::format_report(&title, &stats)),
        FormatCli::Json => {
            let rendered = if pretty {
                serde_json::to_string_pretty(&stats)
            } else {
                serde_json::to_string(&stats)
            };
            let rendered = rendered
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize report: {}", e)));
            println!("{}", rendered);
        }
    }

    analysis_duration
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
