//! Topological sort with cycle detection
//!
//! Sorting runs in two passes:
//!
//! 1. An iterative depth-first search colors every vertex unvisited / visiting / visited.
//!    Reaching a vertex that is still `visiting` is a back edge; the cycle is
//!    rebuilt from parent pointers and returned without further work.
//! 2. Kahn's algorithm over in-degrees produces the order. If it emits fewer
//!    vertices than the graph holds, the graph is reported cyclic anyway.
//!
//! Convention: for every edge `u -> v`, `u` precedes `v` in the result. Ties
//! between simultaneously-ready vertices follow insertion order.

use super::directed::{Graph, Vertex};
use std::collections::{HashMap, VecDeque};

/// Outcome of [`topological_sort`]
///
/// When `has_cycle` is true the order is empty. The cycle path is non-empty
/// and starts and ends with the same id, except when the cycle was only
/// caught by the ordering pass, in which case no path is known.
#[derive(Debug, Clone)]
pub struct SortResult<'g, T> {
    sorted_order: Vec<&'g Vertex<T>>,
    has_cycle: bool,
    cycle_path: Vec<String>,
}

impl<'g, T> SortResult<'g, T> {
    pub(crate) fn acyclic(sorted_order: Vec<&'g Vertex<T>>) -> Self {
        Self {
            sorted_order,
            has_cycle: false,
            cycle_path: Vec::new(),
        }
    }

    pub(crate) fn cyclic(cycle_path: Vec<String>) -> Self {
        Self {
            sorted_order: Vec::new(),
            has_cycle: true,
            cycle_path,
        }
    }

    /// Vertices in topological order (empty if cyclic)
    pub fn sorted_order(&self) -> &[&'g Vertex<T>] {
        &self.sorted_order
    }

    /// Consumes the result, returning the ordered vertices
    pub fn into_sorted_order(self) -> Vec<&'g Vertex<T>> {
        self.sorted_order
    }

    /// Ids of the sorted vertices
    pub fn sorted_ids(&self) -> Vec<&'g str> {
        self.sorted_order.iter().map(|v| v.id()).collect()
    }

    /// True if the graph contains a cycle
    pub fn has_cycle(&self) -> bool {
        self.has_cycle
    }

    /// Vertex ids proving the cycle, first id repeated at the end
    pub fn cycle_path(&self) -> &[String] {
        &self.cycle_path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    Visiting,
    Visited,
}

/// Runs the depth-first cycle search on its own
///
/// Returns the cycle path of the first back edge found, walking roots in
/// insertion order.
///
/// ```
/// use cfm_domain::graph::{Graph, detect_cycle};
///
/// let mut graph = Graph::new();
/// graph.add_vertex("a", ());
/// graph.add_edge("a", "a");
/// assert_eq!(detect_cycle(&graph), Some(vec!["a".to_string(), "a".to_string()]));
/// ```
pub fn detect_cycle<T>(graph: &Graph<T>) -> Option<Vec<String>> {
    let mut colors: HashMap<&str, Color> = HashMap::with_capacity(graph.len());
    let mut parents: HashMap<&str, &str> = HashMap::new();

    for id in graph.ids() {
        if colors.get(id).copied().unwrap_or(Color::Unvisited) == Color::Unvisited {
            if let Some(path) = visit(graph, id, &mut colors, &mut parents) {
                return Some(path);
            }
        }
    }
    None
}

/// Iterative depth-first walk from `root`
///
/// Each frame holds a vertex id and the index of the next outgoing edge to
/// inspect, so chain depth is bounded by the heap rather than the call stack.
fn visit<'g, T>(
    graph: &'g Graph<T>,
    root: &'g str,
    colors: &mut HashMap<&'g str, Color>,
    parents: &mut HashMap<&'g str, &'g str>,
) -> Option<Vec<String>> {
    let mut stack: Vec<(&'g str, usize)> = vec![(root, 0)];
    colors.insert(root, Color::Visiting);

    while let Some(frame) = stack.last_mut() {
        let (id, index) = *frame;
        let edges = graph.get_vertex(id).map(|v| v.edges()).unwrap_or_default();

        let Some(next) = edges.get(index) else {
            colors.insert(id, Color::Visited);
            stack.pop();
            continue;
        };
        frame.1 += 1;

        let next = next.as_str();
        match colors.get(next).copied().unwrap_or(Color::Unvisited) {
            Color::Unvisited => {
                parents.insert(next, id);
                colors.insert(next, Color::Visiting);
                stack.push((next, 0));
            }
            Color::Visiting => return Some(rebuild_cycle(id, next, parents)),
            Color::Visited => {}
        }
    }

    None
}

/// Walks parent pointers from `current` back to `target`
fn rebuild_cycle(current: &str, target: &str, parents: &HashMap<&str, &str>) -> Vec<String> {
    let mut path = vec![current.to_string()];
    let mut cursor = current;
    while cursor != target {
        match parents.get(cursor) {
            Some(&parent) => {
                cursor = parent;
                path.push(cursor.to_string());
            }
            None => break,
        }
    }
    path.reverse();
    path.push(target.to_string());
    path
}

/// Sorts the graph so that every edge source precedes its target
///
/// ```
/// use cfm_domain::graph::{Graph, topological_sort};
///
/// let mut graph = Graph::new();
/// for id in ["a", "b", "c"] {
///     graph.add_vertex(id, ());
/// }
/// graph.add_edge("a", "b");
/// graph.add_edge("b", "c");
///
/// let result = topological_sort(&graph);
/// assert!(!result.has_cycle());
/// assert_eq!(result.sorted_ids(), vec!["a", "b", "c"]);
/// ```
pub fn topological_sort<T>(graph: &Graph<T>) -> SortResult<'_, T> {
    if let Some(path) = detect_cycle(graph) {
        return SortResult::cyclic(path);
    }

    let mut in_degrees = graph.in_degrees();
    let mut queue: VecDeque<&Vertex<T>> = graph
        .vertices()
        .filter(|v| in_degrees.get(v.id()) == Some(&0))
        .collect();
    let mut sorted = Vec::with_capacity(graph.len());

    while let Some(vertex) = queue.pop_front() {
        sorted.push(vertex);
        for target in vertex.edges() {
            let Some(degree) = in_degrees.get_mut(target.as_str()) else {
                continue;
            };
            *degree -= 1;
            if *degree == 0 {
                if let Some(next) = graph.get_vertex(target) {
                    queue.push_back(next);
                }
            }
        }
    }

    if sorted.len() != graph.len() {
        return SortResult::cyclic(Vec::new());
    }
    SortResult::acyclic(sorted)
}
