//! Dijkstra shortest-path search for directed, positively-weighted graphs.
//!
//! Uses a binary-heap frontier with lazy deletion: relaxation pushes a
//! fresh entry instead of decreasing a key, and stale entries are skipped
//! when popped. Search stops as soon as the target is settled.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

/// A directed edge with a positive hyperspace-unit weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Source node id.
    pub from: String,

    /// Destination node id.
    pub to: String,

    /// Edge weight. Must be strictly positive.
    pub weight: u32,
}

impl Edge {
    /// Create a new directed edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// A shortest path from start to target, inclusive of both endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Node ids from start to target. Consecutive ids are connected by
    /// an edge from the input list.
    pub path: Vec<String>,

    /// Sum of the traversed edge weights.
    pub total_weight: u64,
}

/// Error from shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// An input edge violates the positive-weight precondition.
    #[error("edge {from} -> {to} has a non-positive weight")]
    InvalidWeight { from: String, to: String },
}

/// Frontier entry: a candidate distance for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State<'a> {
    cost: u64,
    node: &'a str,
}

impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap);
        // equal costs pop in lexicographic node order so path identity
        // is deterministic when several optimal paths exist.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest directed path from `start` to `target`.
///
/// Returns `Ok(None)` when `target` is unreachable from `start`; that is
/// an expected answer, not a fault. `start == target` always yields the
/// single-node path with weight 0, even when `start` has no edges.
///
/// # Errors
///
/// Fails with [`RoutingError::InvalidWeight`] if any edge weight is zero,
/// before any traversal happens.
pub fn find_shortest_path(
    edges: &[Edge],
    start: &str,
    target: &str,
) -> Result<Option<PathResult>, RoutingError> {
    // Validate every edge up front; a single bad weight invalidates the
    // whole input regardless of whether the edge would be traversed.
    let mut adjacency: HashMap<&str, Vec<(&str, u32)>> = HashMap::new();
    for edge in edges {
        if edge.weight == 0 {
            return Err(RoutingError::InvalidWeight {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
        // Parallel edges between the same pair are all kept; relaxation
        // settles on the cheapest one.
        adjacency
            .entry(edge.from.as_str())
            .or_default()
            .push((edge.to.as_str(), edge.weight));
    }

    if start == target {
        return Ok(Some(PathResult {
            path: vec![start.to_owned()],
            total_weight: 0,
        }));
    }

    let mut dist: HashMap<&str, u64> = HashMap::from([(start, 0)]);
    let mut prev: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();

    let mut frontier = BinaryHeap::new();
    frontier.push(State {
        cost: 0,
        node: start,
    });

    while let Some(State { cost, node }) = frontier.pop() {
        // Stale entry for an already-settled node.
        if !settled.insert(node) {
            continue;
        }

        if node == target {
            break;
        }

        for &(neighbor, weight) in adjacency.get(node).into_iter().flatten() {
            let candidate = cost + u64::from(weight);
            if dist.get(neighbor).is_none_or(|&best| candidate < best) {
                dist.insert(neighbor, candidate);
                prev.insert(neighbor, node);
                frontier.push(State {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    let Some(&total_weight) = dist.get(target) else {
        trace!(start, target, "target unreachable");
        return Ok(None);
    };

    // Walk predecessor links back from the target, then reverse.
    let mut path = vec![target.to_owned()];
    let mut node = target;
    while node != start {
        node = prev
            .get(node)
            .copied()
            .expect("every node with a recorded distance has a predecessor chain to start");
        path.push(node.to_owned());
    }
    path.reverse();

    trace!(start, target, total_weight, hops = path.len() - 1, "path found");

    Ok(Some(PathResult { path, total_weight }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(list: &[(&str, &str, u32)]) -> Vec<Edge> {
        list.iter().map(|&(f, t, w)| Edge::new(f, t, w)).collect()
    }

    #[test]
    fn multi_hop_beats_expensive_direct_edge() {
        let edges = edges(&[("A", "B", 1), ("B", "C", 2), ("A", "C", 10)]);
        let result = find_shortest_path(&edges, "A", "C").unwrap().unwrap();
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.total_weight, 3);
    }

    #[test]
    fn edges_are_directed() {
        let edges = edges(&[("A", "B", 5)]);
        assert_eq!(find_shortest_path(&edges, "B", "A").unwrap(), None);
    }

    #[test]
    fn unreachable_target() {
        let edges = edges(&[("A", "B", 1), ("C", "D", 2)]);
        assert_eq!(find_shortest_path(&edges, "A", "D").unwrap(), None);
    }

    #[test]
    fn zero_weight_is_rejected_before_traversal() {
        let bad = edges(&[("A", "B", 0)]);
        let err = find_shortest_path(&bad, "A", "B").unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidWeight {
                from: "A".to_owned(),
                to: "B".to_owned(),
            }
        );

        // Invalid regardless of start/target, even when the bad edge is
        // nowhere near the query.
        let bad = edges(&[("A", "B", 1), ("X", "Y", 0)]);
        assert!(find_shortest_path(&bad, "A", "B").is_err());
    }

    #[test]
    fn start_equals_target() {
        let edges = edges(&[("A", "B", 1)]);
        let result = find_shortest_path(&edges, "A", "A").unwrap().unwrap();
        assert_eq!(result.path, vec!["A"]);
        assert_eq!(result.total_weight, 0);

        // Holds even when the node appears in no edge at all.
        let result = find_shortest_path(&[], "Z", "Z").unwrap().unwrap();
        assert_eq!(result.path, vec!["Z"]);
        assert_eq!(result.total_weight, 0);
    }

    #[test]
    fn start_without_outgoing_edges_is_unreachable() {
        let edges = edges(&[("A", "B", 1)]);
        assert_eq!(find_shortest_path(&edges, "C", "B").unwrap(), None);
    }

    #[test]
    fn parallel_edges_use_the_cheapest() {
        let edges = edges(&[("A", "B", 7), ("A", "B", 3), ("A", "B", 5)]);
        let result = find_shortest_path(&edges, "A", "B").unwrap().unwrap();
        assert_eq!(result.path, vec!["A", "B"]);
        assert_eq!(result.total_weight, 3);
    }

    #[test]
    fn equal_cost_paths_break_ties_lexicographically() {
        // Two optimal paths, A->B->D and A->C->D, both weight 2.
        let edges = edges(&[("A", "B", 1), ("A", "C", 1), ("B", "D", 1), ("C", "D", 1)]);
        let result = find_shortest_path(&edges, "A", "D").unwrap().unwrap();
        assert_eq!(result.total_weight, 2);
        assert_eq!(result.path, vec!["A", "B", "D"]);
    }

    #[test]
    fn cycle_does_not_loop_forever() {
        let edges = edges(&[("A", "B", 1), ("B", "A", 1), ("B", "C", 1)]);
        let result = find_shortest_path(&edges, "A", "C").unwrap().unwrap();
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.total_weight, 2);
    }
}
