//! Core graph structure — attributed nodes + edges with adjacency lists.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::types::Attrs;

/// Shared empty attribute map returned for unknown nodes and edges.
fn empty_attrs() -> &'static Attrs {
    static EMPTY: OnceLock<Attrs> = OnceLock::new();
    EMPTY.get_or_init(Attrs::new)
}

/// An in-memory graph with attributed nodes and edges.
///
/// Storage is adjacency-list based. In undirected mode every edge is stored
/// twice, once per direction, with identical attribute content; both entries
/// are mutated together inside this type so they cannot drift apart, and
/// callers get O(1) attribute lookup from either endpoint.
///
/// Mutations are total functions: re-adding an existing node merges its
/// attributes, removing something absent is a no-op, and queries on unknown
/// identifiers return empty defaults rather than errors.
pub struct SimpleGraph {
    /// Neighbor lists in insertion order, one entry per node.
    adjacency: HashMap<String, Vec<String>>,
    /// Node identifiers in insertion order.
    node_order: Vec<String>,
    /// Node attribute bags, one entry per node.
    node_attrs: HashMap<String, Attrs>,
    /// Edge attribute bags keyed by ordered (source, target) pair.
    edge_attrs: HashMap<(String, String), Attrs>,
    /// Stored edge keys in insertion order (mirrored keys included).
    edge_order: Vec<(String, String)>,
    /// Whether edges are one-way. Fixed at construction.
    directed: bool,
}

impl SimpleGraph {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: HashMap::new(),
            node_order: Vec::new(),
            node_attrs: HashMap::new(),
            edge_attrs: HashMap::new(),
            edge_order: Vec::new(),
            directed,
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether this graph was constructed in directed mode.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Number of stored edge entries.
    ///
    /// In undirected mode each logical edge is stored once per direction, so
    /// a single undirected edge counts as two entries here. Use `edges()` for
    /// the logical edge set.
    pub fn edge_count(&self) -> usize {
        self.edge_attrs.len()
    }

    /// Whether a node with this identifier exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Add a node, merging `attrs` into any attributes it already has.
    ///
    /// Idempotent: re-adding an existing node is not an error. Later calls
    /// overwrite same-named attribute keys and leave the rest untouched.
    pub fn add_node(&mut self, id: impl Into<String>, attrs: Attrs) {
        let id = id.into();
        if !self.adjacency.contains_key(&id) {
            self.adjacency.insert(id.clone(), Vec::new());
            self.node_order.push(id.clone());
        }
        self.node_attrs.entry(id).or_default().extend(attrs);
    }

    /// Add multiple nodes, applying the same attribute set to each.
    pub fn add_nodes_from<I>(&mut self, ids: I, common_attrs: Attrs)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for id in ids {
            self.add_node(id, common_attrs.clone());
        }
    }

    /// Remove a node and everything referencing it.
    ///
    /// Cascades: strips the node from every other neighbor list, deletes its
    /// attribute bag, and deletes every edge attribute entry with the node on
    /// either side. No-op if the node is absent.
    pub fn remove_node(&mut self, id: &str) {
        if self.adjacency.remove(id).is_none() {
            return;
        }
        self.node_order.retain(|n| n != id);
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| n != id);
        }
        self.node_attrs.remove(id);

        let stored_before = self.edge_attrs.len();
        self.edge_attrs.retain(|(u, v), _| u != id && v != id);
        self.edge_order.retain(|(u, v)| u != id && v != id);
        log::debug!(
            "removed node '{}' and {} edge entries",
            id,
            stored_before - self.edge_attrs.len()
        );
    }

    /// Add an edge from `u` to `v`, creating either endpoint if missing.
    ///
    /// The attribute assignment is authoritative: re-adding an existing edge
    /// replaces its prior attribute set instead of merging, asymmetric with
    /// `add_node` on purpose. In undirected mode the edge is also recorded
    /// from `v` to `u` with the same attributes.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>, attrs: Attrs) {
        let u = u.into();
        let v = v.into();
        if !self.contains_node(&u) {
            self.add_node(u.clone(), Attrs::new());
        }
        if !self.contains_node(&v) {
            self.add_node(v.clone(), Attrs::new());
        }

        if let Some(forward) = self.adjacency.get_mut(&u) {
            if !forward.contains(&v) {
                forward.push(v.clone());
            }
        }
        if !self.directed {
            if let Some(backward) = self.adjacency.get_mut(&v) {
                if !backward.contains(&u) {
                    backward.push(u.clone());
                }
            }
        }

        self.store_edge_attrs((u.clone(), v.clone()), attrs.clone());
        if !self.directed && u != v {
            self.store_edge_attrs((v, u), attrs);
        }
    }

    /// Remove the edge from `u` to `v` (both directions if undirected).
    ///
    /// No-op if the edge is absent.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if let Some(neighbors) = self.adjacency.get_mut(u) {
            neighbors.retain(|n| n != v);
        }
        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(v) {
                neighbors.retain(|n| n != u);
            }
        }

        let forward = (u.to_string(), v.to_string());
        self.edge_attrs.remove(&forward);
        self.edge_order.retain(|key| *key != forward);
        if !self.directed {
            let backward = (v.to_string(), u.to_string());
            self.edge_attrs.remove(&backward);
            self.edge_order.retain(|key| *key != backward);
        }
    }

    /// Neighbors of a node in insertion order, empty if the node is absent.
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// All node identifiers in insertion order.
    pub fn nodes(&self) -> &[String] {
        &self.node_order
    }

    /// All edges as (source, target) pairs.
    ///
    /// Directed mode returns every stored entry. Undirected mode returns each
    /// logical edge exactly once, keeping the first-inserted orientation and
    /// suppressing its mirror.
    pub fn edges(&self) -> Vec<(String, String)> {
        if self.directed {
            return self.edge_order.clone();
        }
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut result = Vec::new();
        for (u, v) in &self.edge_order {
            if !seen.contains(&(v.as_str(), u.as_str())) {
                result.push((u.clone(), v.clone()));
            }
            seen.insert((u.as_str(), v.as_str()));
        }
        result
    }

    /// Attribute bag of a node, empty if the node is absent.
    pub fn node_attributes(&self, id: &str) -> &Attrs {
        self.node_attrs.get(id).unwrap_or(empty_attrs())
    }

    /// Attribute bag of the edge from `u` to `v`, empty if the edge is absent.
    ///
    /// In undirected mode either endpoint order resolves to the same content.
    pub fn edge_attributes(&self, u: &str, v: &str) -> &Attrs {
        self.edge_attrs
            .get(&(u.to_string(), v.to_string()))
            .unwrap_or(empty_attrs())
    }

    /// Record an edge attribute entry, tracking first insertion for ordering.
    fn store_edge_attrs(&mut self, key: (String, String), attrs: Attrs) {
        if !self.edge_attrs.contains_key(&key) {
            self.edge_order.push(key.clone());
        }
        self.edge_attrs.insert(key, attrs);
    }
}

impl std::fmt::Display for SimpleGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<SimpleGraph directed={}, nodes={}, edges={}>",
            self.directed,
            self.node_count(),
            self.edge_count()
        )
    }
}
