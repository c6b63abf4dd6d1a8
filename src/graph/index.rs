use super::definition::{EdgeDefinition, NodeDefinition, WorkflowGraph};
use ahash::AHashMap;

/// How edges that reference unknown node ids are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Drop dangling edges once, before any component sees them.
    #[default]
    Strict,
    /// Hand every component the raw edge list. Cycle detection and depth still
    /// ignore dangling edges for adjacency; connectivity and branch counting
    /// count them.
    Lenient,
}

/// Borrowed view over a workflow graph: the ordered node id set and the edge
/// list selected by an [`EdgePolicy`].
///
/// Node ids keep their first-occurrence order, which fixes the root order of
/// every traversal for a given input. A repeated id keeps its first node.
#[derive(Debug)]
pub struct GraphIndex<'a> {
    nodes: Vec<&'a NodeDefinition>,
    ids: Vec<&'a str>,
    positions: AHashMap<&'a str, usize>,
    edges: Vec<&'a EdgeDefinition>,
    dangling: usize,
}

impl<'a> GraphIndex<'a> {
    pub fn build(graph: &'a WorkflowGraph, policy: EdgePolicy) -> Self {
        let mut nodes = Vec::with_capacity(graph.nodes.len());
        let mut ids = Vec::with_capacity(graph.nodes.len());
        let mut positions = AHashMap::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            positions.entry(node.id.as_str()).or_insert_with(|| {
                nodes.push(node);
                ids.push(node.id.as_str());
                ids.len() - 1
            });
        }
        if nodes.len() < graph.nodes.len() {
            tracing::warn!(
                duplicates = graph.nodes.len() - nodes.len(),
                "repeated node ids collapsed to their first occurrence"
            );
        }

        let is_valid = |edge: &EdgeDefinition| {
            positions.contains_key(edge.source.as_str())
                && positions.contains_key(edge.target.as_str())
        };
        let dangling = graph.edges.iter().filter(|&e| !is_valid(e)).count();
        let edges: Vec<&EdgeDefinition> = match policy {
            EdgePolicy::Strict => graph.edges.iter().filter(|&e| is_valid(e)).collect(),
            EdgePolicy::Lenient => graph.edges.iter().collect(),
        };

        if dangling > 0 && policy == EdgePolicy::Strict {
            tracing::warn!(dangling, "dropping edges that reference unknown node ids");
        }

        Self {
            nodes,
            ids,
            positions,
            edges,
            dangling,
        }
    }

    /// Unique nodes in first-occurrence order.
    pub fn nodes(&self) -> &[&'a NodeDefinition] {
        &self.nodes
    }

    /// Unique node ids in first-occurrence order.
    pub fn node_ids(&self) -> &[&'a str] {
        &self.ids
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// The edges selected for analysis.
    pub fn edges(&self) -> &[&'a EdgeDefinition] {
        &self.edges
    }

    /// Number of input edges with at least one endpoint outside the node set,
    /// whether or not the policy kept them.
    pub fn dangling_edges(&self) -> usize {
        self.dangling
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Outgoing adjacency by node position, built only from edges whose
    /// endpoints both exist. Duplicate edges stay duplicated.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.ids.len()];
        for edge in &self.edges {
            if let (Some(source), Some(target)) =
                (self.position(&edge.source), self.position(&edge.target))
            {
                adjacency[source].push(target);
            }
        }
        adjacency
    }
}
