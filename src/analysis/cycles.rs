use crate::graph::GraphIndex;
use serde::Serialize;

/// Outcome of a cycle search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    pub has_cycles: bool,
    /// The loop that was found, from its entry node back around to the node
    /// that closes it. `None` when the graph is acyclic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_path: Option<Vec<String>>,
}

/// Depth-first search over every root in node order, stopping at the first
/// back edge. Dangling edges are ignored. Self-loops count as cycles.
pub fn detect_cycles(index: &GraphIndex<'_>) -> CycleReport {
    let adjacency = index.adjacency();
    let node_count = index.node_count();
    let mut visited = vec![false; node_count];
    let mut on_path = vec![false; node_count];
    let mut path: Vec<usize> = Vec::new();

    for root in 0..node_count {
        if visited[root] {
            continue;
        }

        // Each frame is (node, index of the next neighbor to try).
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        visited[root] = true;
        on_path[root] = true;
        path.push(root);

        while let Some(&(node, cursor)) = stack.last() {
            let Some(&next) = adjacency[node].get(cursor) else {
                on_path[node] = false;
                path.pop();
                stack.pop();
                continue;
            };
            if let Some(frame) = stack.last_mut() {
                frame.1 += 1;
            }

            if !visited[next] {
                visited[next] = true;
                on_path[next] = true;
                path.push(next);
                stack.push((next, 0));
            } else if on_path[next] {
                let start = path.iter().position(|&p| p == next).unwrap_or(0);
                let ids = index.node_ids();
                let cycle: Vec<String> = path[start..].iter().map(|&p| ids[p].to_string()).collect();
                tracing::debug!(cycle = ?cycle, "circular dependency found");
                return CycleReport {
                    has_cycles: true,
                    cycle_path: Some(cycle),
                };
            }
        }
    }

    CycleReport::default()
}
