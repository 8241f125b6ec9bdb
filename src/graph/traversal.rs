//! Graph traversal algorithms (DFS, BFS).
//!
//! Both walks read the graph through `neighbors()` only and report
//! reachability: the set of nodes reachable from the start node. Visit order
//! is not part of the contract.

use std::collections::{HashSet, VecDeque};

use super::SimpleGraph;

/// Depth-first traversal from `start`, returning the set of reached nodes.
///
/// Iterative and stack-based. Unvisited neighbors are pushed in reverse of
/// their `neighbors()` order so the first neighbor is explored first, matching
/// the order a recursive implementation would produce. A node may sit on the
/// stack more than once before it is visited; re-popping it is a no-op.
///
/// Total function: a start node not in the graph yields just itself.
pub fn dfs(graph: &SimpleGraph, start: &str) -> HashSet<String> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut stack: Vec<String> = vec![start.to_string()];

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());
        for neighbor in graph.neighbors(&node).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
            }
        }
    }

    visited
}

/// Breadth-first traversal from `start`, returning the set of reached nodes.
///
/// Iterative and queue-based; unvisited neighbors are enqueued in their
/// `neighbors()` order. Same return shape as `dfs` — reachability only, no
/// layer or distance information.
pub fn bfs(graph: &SimpleGraph, start: &str) -> HashSet<String> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::from([start.to_string()]);

    while let Some(node) = queue.pop_front() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());
        for neighbor in graph.neighbors(&node) {
            if !visited.contains(neighbor) {
                queue.push_back(neighbor.clone());
            }
        }
    }

    visited
}
