//! Dependency graph construction
//!
//! Builds a graph with one vertex per assembly, keyed by name, whose payload
//! is the assembly's index in registration order. Edges run from the
//! requiring assembly to the providing one (consumer -> provider), so a
//! topological sort lists consumers before their providers and a single
//! reversal yields the dependency-first order.

use crate::ports::ServiceAssembly;
use cfm_domain::error::{Error, Result};
use cfm_domain::graph::{Graph, topological_sort};
use cfm_domain::value_objects::ServiceType;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A resolved `requires` edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Dependency {
    pub consumer: usize,
    pub provider: usize,
    pub service_type: ServiceType,
}

/// Consumer -> provider graph plus the edges that produced it
pub(crate) struct DependencyGraph {
    pub graph: Graph<usize>,
    pub dependencies: Vec<Dependency>,
}

/// Build the consumer -> provider graph, failing on duplicate names or unmet requirements
pub(crate) fn build_dependency_graph(
    assemblies: &[Box<dyn ServiceAssembly>],
) -> Result<DependencyGraph> {
    let mut graph = Graph::new();
    for (index, assembly) in assemblies.iter().enumerate() {
        if !graph.add_vertex(assembly.name(), index) {
            return Err(Error::duplicate_assembly(assembly.name()));
        }
    }

    // Last provider wins when several assemblies provide the same type
    let mut providers: HashMap<ServiceType, usize> = HashMap::new();
    for (index, assembly) in assemblies.iter().enumerate() {
        for service_type in assembly.provides() {
            let previous = providers.insert(service_type.clone(), index);
            if let Some(previous) = previous.filter(|&p| p != index) {
                warn!(
                    service_type = %service_type,
                    previous = %assemblies[previous].name(),
                    provider = %assembly.name(),
                    "Service type provided by more than one assembly; last registration wins"
                );
            }
        }
    }

    let mut dependencies = Vec::new();
    for (consumer, assembly) in assemblies.iter().enumerate() {
        for service_type in assembly.requires() {
            let Some(&provider) = providers.get(&service_type) else {
                return Err(Error::missing_dependency(assembly.name(), service_type));
            };
            debug!(
                assembly = %assembly.name(),
                provider = %assemblies[provider].name(),
                service_type = %service_type,
                "Resolved dependency"
            );
            graph.add_edge(assembly.name(), assemblies[provider].name());
            dependencies.push(Dependency {
                consumer,
                provider,
                service_type,
            });
        }
    }

    Ok(DependencyGraph {
        graph,
        dependencies,
    })
}

/// Sort the consumer -> provider graph and reverse it into dependency-first order
pub(crate) fn dependency_first_order(graph: &Graph<usize>) -> Result<Vec<usize>> {
    let result = topological_sort(graph);
    if result.has_cycle() {
        return Err(Error::cyclic_dependency(result.cycle_path().to_vec()));
    }
    Ok(result
        .sorted_order()
        .iter()
        .rev()
        .map(|vertex| *vertex.value())
        .collect())
}

/// The same vertices with every edge flipped (provider -> consumer)
pub(crate) fn provider_first_graph(graph: &Graph<usize>) -> Graph<usize> {
    let mut flipped = Graph::new();
    for vertex in graph.vertices() {
        flipped.add_vertex(vertex.id(), *vertex.value());
    }
    for vertex in graph.vertices() {
        for target in vertex.edges() {
            flipped.add_edge(target, vertex.id());
        }
    }
    flipped
}
