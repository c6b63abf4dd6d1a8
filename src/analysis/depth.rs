use crate::graph::GraphIndex;
use std::collections::VecDeque;

/// Longest path, counted in nodes, found by topological propagation from every
/// in-degree-zero node.
///
/// Each node takes the maximum of `parent depth + 1` over its processed parents,
/// so this is the longest-path depth rather than a BFS level. Nodes that never
/// reach in-degree zero (anything on or behind a cycle) get no depth and do not
/// contribute. An edge whose target exists counts toward in-degree even when
/// its source does not, which keeps that target out of the queue.
pub fn calculate_graph_depth(index: &GraphIndex<'_>) -> usize {
    let node_count = index.node_count();
    if node_count == 0 {
        return 0;
    }

    let adjacency = index.adjacency();
    let mut in_degree = vec![0usize; node_count];
    for edge in index.edges() {
        if let Some(target) = index.position(&edge.target) {
            in_degree[target] += 1;
        }
    }

    // 0 marks a node that has not been assigned a depth yet.
    let mut depth = vec![0usize; node_count];
    let mut queue: VecDeque<usize> = (0..node_count).filter(|&n| in_degree[n] == 0).collect();
    for &seed in &queue {
        depth[seed] = 1;
    }

    let mut max_depth = 0;
    while let Some(node) = queue.pop_front() {
        let current = depth[node];
        max_depth = max_depth.max(current);

        for &next in &adjacency[node] {
            let proposed = current + 1;
            if depth[next] < proposed {
                depth[next] = proposed;
            }
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    max_depth
}
