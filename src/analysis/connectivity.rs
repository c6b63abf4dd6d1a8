use crate::graph::GraphIndex;
use ahash::AHashSet;
use serde::Serialize;

/// How densely the nodes of a workflow are wired together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityStats {
    /// Edge count as a percentage of the undirected complete-graph maximum.
    pub density: f64,
    pub average_connections_per_node: f64,
    pub disconnected_nodes: usize,
    pub orphans: usize,
    #[serde(skip)]
    pub disconnected_ids: Vec<String>,
    #[serde(skip)]
    pub orphan_ids: Vec<String>,
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn calculate_connectivity(
    node_count: usize,
    edge_count: usize,
    index: &GraphIndex<'_>,
) -> ConnectivityStats {
    let density = if node_count <= 1 {
        0.0
    } else {
        let max_possible_edges = (node_count * (node_count - 1)) as f64 / 2.0;
        round2(edge_count as f64 / max_possible_edges * 100.0)
    };

    let average_connections_per_node = if node_count == 0 {
        0.0
    } else {
        round2((edge_count * 2) as f64 / node_count as f64)
    };

    let mut connected: AHashSet<&str> = AHashSet::new();
    for edge in index.edges() {
        connected.insert(edge.source.as_str());
        connected.insert(edge.target.as_str());
    }
    let disconnected_ids: Vec<String> = index
        .node_ids()
        .iter()
        .filter(|id| !connected.contains(**id))
        .map(|id| id.to_string())
        .collect();

    let orphan_ids: Vec<String> = index
        .node_ids()
        .iter()
        .filter(|&&id| {
            let has_input = index.edges().iter().any(|e| e.target == id);
            let has_output = index.edges().iter().any(|e| e.source == id);
            !has_input && !has_output
        })
        .map(|id| id.to_string())
        .collect();

    ConnectivityStats {
        density,
        average_connections_per_node,
        disconnected_nodes: disconnected_ids.len(),
        orphans: orphan_ids.len(),
        disconnected_ids,
        orphan_ids,
    }
}
