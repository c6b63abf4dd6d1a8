use crate::graph::GraphIndex;
use ahash::AHashMap;

/// Total excess fan-out: for each node with more than one outgoing edge, adds
/// `out_degree - 1`. Out-degree counts every selected edge leaving the node,
/// whether or not its target exists.
pub fn count_branches(index: &GraphIndex<'_>) -> usize {
    let mut out_degree: AHashMap<&str, usize> = AHashMap::new();
    for edge in index.edges() {
        *out_degree.entry(edge.source.as_str()).or_insert(0) += 1;
    }

    index
        .node_ids()
        .iter()
        .filter_map(|id| out_degree.get(id))
        .filter(|&&degree| degree > 1)
        .map(|degree| degree - 1)
        .sum()
}
