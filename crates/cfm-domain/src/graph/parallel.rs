//! Parallel level grouping
//!
//! Layers an acyclic graph into batches of mutually independent vertices.
//! An edge `u -> v` makes `u` a prerequisite of `v`, so `u` lands in an
//! earlier level. Vertices inside one level share no edges and could be
//! processed concurrently.

use super::directed::{Graph, Vertex};
use super::sort::{SortResult, topological_sort};
use std::collections::HashMap;

/// One batch of independent vertices
#[derive(Debug, Clone)]
pub struct ParallelLevel<'g, T> {
    level: usize,
    vertices: Vec<&'g Vertex<T>>,
}

impl<'g, T> ParallelLevel<'g, T> {
    /// Zero-based level index
    pub fn level(&self) -> usize {
        self.level
    }

    /// Vertices in this level, ascending by id
    pub fn vertices(&self) -> &[&'g Vertex<T>] {
        &self.vertices
    }

    /// Ids of the vertices in this level, ascending
    pub fn ids(&self) -> Vec<&'g str> {
        self.vertices.iter().map(|v| v.id()).collect()
    }
}

/// Outcome of [`parallel_topological_sort`]
#[derive(Debug, Clone)]
pub struct ParallelSortResult<'g, T> {
    sort: SortResult<'g, T>,
    levels: Vec<ParallelLevel<'g, T>>,
}

impl<'g, T> ParallelSortResult<'g, T> {
    /// The plain topological sort of the same graph
    pub fn sort(&self) -> &SortResult<'g, T> {
        &self.sort
    }

    /// True if the graph contains a cycle; no levels are produced then
    pub fn has_cycle(&self) -> bool {
        self.sort.has_cycle()
    }

    /// Vertex ids proving the cycle
    pub fn cycle_path(&self) -> &[String] {
        self.sort.cycle_path()
    }

    /// Levels in increasing order
    pub fn levels(&self) -> &[ParallelLevel<'g, T>] {
        &self.levels
    }

    /// Level ids as nested vectors, convenient for display and assertions
    pub fn level_ids(&self) -> Vec<Vec<&'g str>> {
        self.levels.iter().map(ParallelLevel::ids).collect()
    }
}

/// Groups an acyclic graph into levels
///
/// Re-validates acyclicity first and returns with `has_cycle` set, and no
/// levels, if the graph is cyclic.
///
/// ```
/// use cfm_domain::graph::{Graph, parallel_topological_sort};
///
/// let mut graph = Graph::new();
/// for id in ["a", "b", "c", "d"] {
///     graph.add_vertex(id, ());
/// }
/// graph.add_edge("a", "b");
/// graph.add_edge("a", "c");
/// graph.add_edge("b", "d");
/// graph.add_edge("c", "d");
///
/// let result = parallel_topological_sort(&graph);
/// assert_eq!(result.level_ids(), vec![vec!["a"], vec!["b", "c"], vec!["d"]]);
/// ```
pub fn parallel_topological_sort<T>(graph: &Graph<T>) -> ParallelSortResult<'_, T> {
    let sort = topological_sort(graph);
    if sort.has_cycle() {
        return ParallelSortResult {
            sort,
            levels: Vec::new(),
        };
    }

    let mut remaining: HashMap<&str, usize> = graph.in_degrees();
    let mut levels: Vec<ParallelLevel<'_, T>> = Vec::new();

    while !remaining.is_empty() {
        let mut ready: Vec<&Vertex<T>> = remaining
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .filter_map(|(id, _)| graph.get_vertex(id))
            .collect();

        if ready.is_empty() {
            return ParallelSortResult {
                sort: SortResult::cyclic(Vec::new()),
                levels: Vec::new(),
            };
        }

        ready.sort_by(|a, b| a.id().cmp(b.id()));
        for vertex in &ready {
            remaining.remove(vertex.id());
        }
        for vertex in &ready {
            for target in vertex.edges() {
                if let Some(degree) = remaining.get_mut(target.as_str()) {
                    *degree = degree.saturating_sub(1);
                }
            }
        }

        levels.push(ParallelLevel {
            level: levels.len(),
            vertices: ready,
        });
    }

    ParallelSortResult { sort, levels }
}
