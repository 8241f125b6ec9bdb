//! Single-source shortest paths (Dijkstra).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::types::{GraphError, GraphResult};

use super::SimpleGraph;

/// Attribute key the algorithm reads edge weights from.
const WEIGHT_KEY: &str = "weight";

/// Weight assumed for edges with no numeric `weight` attribute.
const DEFAULT_WEIGHT: f64 = 1.0;

/// Min-heap entry ordered by accumulated distance.
#[derive(Debug, Clone)]
struct HeapEntry {
    node: String,
    distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.node == other.node
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

/// Shortest distance from `source` to every node known at call time.
///
/// Edge weights come from the `weight` edge attribute, defaulting to 1.0 when
/// the attribute is absent or non-numeric. Unreachable nodes map to
/// `f64::INFINITY`. Fails with `GraphError::NodeNotFound` if `source` is not
/// in the graph.
///
/// Uses a min-priority queue with lazy deletion: the queue has no
/// decrease-key, so a node can carry several queued entries and any entry
/// worse than the node's current best distance is discarded on pop. Negative
/// edge weights are not guarded against and may produce incorrect results.
pub fn dijkstra(graph: &SimpleGraph, source: &str) -> GraphResult<HashMap<String, f64>> {
    if !graph.contains_node(source) {
        return Err(GraphError::NodeNotFound(source.to_string()));
    }

    let mut dist: HashMap<String, f64> = graph
        .nodes()
        .iter()
        .map(|node| (node.clone(), f64::INFINITY))
        .collect();
    dist.insert(source.to_string(), 0.0);

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        node: source.to_string(),
        distance: 0.0,
    }));

    while let Some(Reverse(HeapEntry { node, distance })) = heap.pop() {
        // Stale entry: a shorter path to this node was already settled.
        if dist.get(&node).is_some_and(|&best| distance > best) {
            continue;
        }

        for neighbor in graph.neighbors(&node) {
            let weight = graph
                .edge_attributes(&node, neighbor)
                .get(WEIGHT_KEY)
                .and_then(|value| value.as_f64())
                .unwrap_or(DEFAULT_WEIGHT);
            let candidate = distance + weight;

            let Some(&best) = dist.get(neighbor) else {
                continue;
            };
            if candidate < best {
                dist.insert(neighbor.clone(), candidate);
                heap.push(Reverse(HeapEntry {
                    node: neighbor.clone(),
                    distance: candidate,
                }));
            }
        }
    }

    Ok(dist)
}
