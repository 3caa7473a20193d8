//! Dependency graphs
//!
//! A generic directed graph keyed by string id, with the ordering algorithms
//! the assembler builds on. The module has no knowledge of services.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`Graph`] / [`Vertex`] | Vertices with an owned payload and deduplicated outgoing edges |
//! | [`topological_sort`] | Iterative DFS cycle search with path reconstruction, then Kahn's algorithm |
//! | [`detect_cycle`] | The cycle search alone |
//! | [`parallel_topological_sort`] | Layers an acyclic graph into independent batches |
//!
//! All algorithms share one convention: an edge `u -> v` means `u` comes
//! first. Callers that model "requires" edges (consumer -> provider) must
//! reverse the resulting order themselves.

mod directed;
mod parallel;
mod sort;

pub use directed::{Graph, Vertex};
pub use parallel::{ParallelLevel, ParallelSortResult, parallel_topological_sort};
pub use sort::{SortResult, detect_cycle, topological_sort};
