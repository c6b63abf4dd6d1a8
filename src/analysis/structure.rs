use super::branches::count_branches;
use super::category::Category;
use super::cycles::detect_cycles;
use super::depth::calculate_graph_depth;
use crate::graph::GraphIndex;
use ahash::AHashMap;
use serde::Serialize;

/// Structural summary of a workflow: entry and exit points, cycles, depth and fan-out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureStats {
    pub input_nodes: usize,
    pub output_nodes: usize,
    pub has_cycles: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_path: Option<Vec<String>>,
    pub depth: usize,
    pub branches: usize,
}

pub fn analyze_structure(
    index: &GraphIndex<'_>,
    node_types: &AHashMap<Category, usize>,
) -> StructureStats {
    let cycles = detect_cycles(index);

    StructureStats {
        input_nodes: node_types.get(&Category::Input).copied().unwrap_or(0),
        output_nodes: node_types.get(&Category::Output).copied().unwrap_or(0),
        has_cycles: cycles.has_cycles,
        cycle_path: cycles.cycle_path,
        depth: calculate_graph_depth(index),
        branches: count_branches(index),
    }
}
