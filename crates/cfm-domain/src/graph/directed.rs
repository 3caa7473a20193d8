//! Directed graph keyed by string vertex id
//!
//! The graph is a plain value container: vertices own a payload and an
//! ordered, deduplicated list of outgoing edges. There are no removal
//! operations and no background behavior.
//!
//! Mutations never fail. Adding a vertex whose id already exists, or an edge
//! whose endpoint is missing or that already exists, leaves the graph
//! untouched and returns `false` so callers can detect misconfiguration.

use std::collections::HashMap;

/// A named node holding a payload and its outgoing edges
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: String,
    value: T,
    /// Target ids, in the order edges were added
    edges: Vec<String>,
}

impl<T> Vertex<T> {
    fn new(id: String, value: T) -> Self {
        Self {
            id,
            value,
            edges: Vec::new(),
        }
    }

    /// Returns the vertex id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the payload stored at creation
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the ids this vertex has edges to, in insertion order
    pub fn edges(&self) -> &[String] {
        &self.edges
    }

    /// Returns the number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if this vertex has an edge to `target`
    pub fn has_edge_to(&self, target: &str) -> bool {
        self.edges.iter().any(|e| e == target)
    }
}

/// A directed graph with an arbitrary payload per vertex
///
/// # Example
///
/// ```
/// use cfm_domain::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_vertex("api", 1);
/// graph.add_vertex("store", 2);
///
/// assert!(graph.add_edge("api", "store"));
/// // Duplicate edges and unknown endpoints are ignored
/// assert!(!graph.add_edge("api", "store"));
/// assert!(!graph.add_edge("api", "missing"));
///
/// assert_eq!(graph.get_value("store"), Some(&2));
/// assert_eq!(graph.get_vertex("api").unwrap().edges(), ["store"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: HashMap<String, Vertex<T>>,
    /// Insertion order for deterministic iteration
    insertion_order: Vec<String>,
}

impl<T> Graph<T> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Returns the number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if a vertex with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Adds a vertex
    ///
    /// First write wins: if `id` already exists the call is ignored and the
    /// original payload is kept. Returns `true` if the vertex was inserted.
    pub fn add_vertex(&mut self, id: impl Into<String>, value: T) -> bool {
        let id = id.into();
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.insertion_order.push(id.clone());
        self.vertices.insert(id.clone(), Vertex::new(id, value));
        true
    }

    /// Adds an edge `from -> to`
    ///
    /// Ignored if either endpoint is missing or the edge already exists.
    /// Returns `true` if the edge was appended.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        if !self.vertices.contains_key(to) {
            return false;
        }
        match self.vertices.get_mut(from) {
            Some(vertex) if !vertex.has_edge_to(to) => {
                vertex.edges.push(to.to_string());
                true
            }
            _ => false,
        }
    }

    /// Looks up a vertex by id
    pub fn get_vertex(&self, id: &str) -> Option<&Vertex<T>> {
        self.vertices.get(id)
    }

    /// Looks up a vertex payload by id
    pub fn get_value(&self, id: &str) -> Option<&T> {
        self.vertices.get(id).map(Vertex::value)
    }

    /// Iterates vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.vertices.get(id))
    }

    /// Iterates vertex ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.insertion_order.iter().map(String::as_str)
    }

    /// Returns the total number of edges
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// Computes the in-degree (count of edges targeting it) of every vertex
    pub fn in_degrees(&self) -> HashMap<&str, usize> {
        let mut degrees: HashMap<&str, usize> = self.ids().map(|id| (id, 0)).collect();
        for vertex in self.vertices.values() {
            for target in &vertex.edges {
                if let Some(degree) = degrees.get_mut(target.as_str()) {
                    *degree += 1;
                }
            }
        }
        degrees
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
