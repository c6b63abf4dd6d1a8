//! Common test utilities for building workflow graphs.
use flowstat::prelude::*;

#[allow(dead_code)]
pub const INPUT: &str = "nodetool.input.StringInput";
#[allow(dead_code)]
pub const OUTPUT: &str = "nodetool.output.StringOutput";
#[allow(dead_code)]
pub const LLM: &str = "openai.text.ChatCompletion";

/// Builds a graph from `(id, type)` pairs and `(source, target)` pairs.
#[allow(dead_code)]
pub fn graph(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> WorkflowGraph {
    WorkflowGraph::new(
        nodes
            .iter()
            .map(|(id, node_type)| NodeDefinition::new(*id, *node_type))
            .collect(),
        edges
            .iter()
            .map(|(source, target)| EdgeDefinition::new(*source, *target))
            .collect(),
    )
}

/// Builds a graph whose nodes all have an empty type string.
#[allow(dead_code)]
pub fn plain(ids: &[&str], edges: &[(&str, &str)]) -> WorkflowGraph {
    let nodes: Vec<(&str, &str)> = ids.iter().map(|id| (*id, "")).collect();
    graph(&nodes, edges)
}

/// `input -> chat -> output`, which passes every health rule.
///
/// Score: 100, complexity 6 + 3 = 9 (simple).
#[allow(dead_code)]
pub fn create_healthy_flow() -> WorkflowGraph {
    graph(
        &[("input", INPUT), ("chat", LLM), ("output", OUTPUT)],
        &[("input", "chat"), ("chat", "output")],
    )
}

/// A flow that triggers every complexity factor.
///
/// A seven-node chain across seven categories with extra fan-out from the
/// first node, plus an untyped two-node cycle on the side.
/// Score: 18 + 18 + 20 + 4 + 2 + 6 = 68 (complex).
#[allow(dead_code)]
pub fn create_complex_flow() -> WorkflowGraph {
    graph(
        &[
            ("n0", INPUT),
            ("n1", LLM),
            ("n2", "huggingface.text_to_image.Flux"),
            ("n3", "nodetool.text.Concat"),
            ("n4", "nodetool.math.Add"),
            ("n5", "nodetool.data.Filter"),
            ("n6", OUTPUT),
            ("x", ""),
            ("y", ""),
        ],
        &[
            ("n0", "n1"),
            ("n1", "n2"),
            ("n2", "n3"),
            ("n3", "n4"),
            ("n4", "n5"),
            ("n5", "n6"),
            ("n0", "n2"),
            ("n0", "n3"),
            ("n0", "n4"),
            ("n0", "n5"),
            ("x", "y"),
            ("y", "x"),
        ],
    )
}
