//! Assembly plan
//!
//! A dry run of dependency resolution: everything `assemble()` checks before
//! its first lifecycle callback, with no side effects.

use super::dependency::{build_dependency_graph, dependency_first_order, provider_first_graph};
use crate::ports::ServiceAssembly;
use cfm_domain::error::{Error, Result};
use cfm_domain::graph::parallel_topological_sort;
use cfm_domain::value_objects::ServiceType;
use serde::Serialize;
use std::fmt;

/// A resolved `requires` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDependency {
    /// Assembly declaring the requirement
    pub consumer: String,
    /// Assembly providing the service type
    pub provider: String,
    /// The required service type
    pub service_type: ServiceType,
}

/// Startup order and independent batches for a set of assemblies
///
/// `levels` groups assemblies whose dependencies all sit in earlier levels.
/// It is informational: the assembler always runs assemblies one at a time
/// in `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyPlan {
    /// Dependency-first initialization order
    pub order: Vec<String>,
    /// Batches of mutually independent assemblies, each sorted by name
    pub levels: Vec<Vec<String>>,
    /// Every resolved requirement, in declaration order
    pub dependencies: Vec<PlannedDependency>,
}

impl AssemblyPlan {
    pub(crate) fn build(assemblies: &[Box<dyn ServiceAssembly>]) -> Result<Self> {
        let resolved = build_dependency_graph(assemblies)?;
        let order = dependency_first_order(&resolved.graph)?
            .into_iter()
            .map(|index| assemblies[index].name().to_string())
            .collect();

        let flipped = provider_first_graph(&resolved.graph);
        let grouped = parallel_topological_sort(&flipped);
        if grouped.has_cycle() {
            return Err(Error::cyclic_dependency(grouped.cycle_path().to_vec()));
        }
        let levels = grouped
            .levels()
            .iter()
            .map(|level| level.ids().into_iter().map(str::to_string).collect())
            .collect();

        let dependencies = resolved
            .dependencies
            .into_iter()
            .map(|dep| PlannedDependency {
                consumer: assemblies[dep.consumer].name().to_string(),
                provider: assemblies[dep.provider].name().to_string(),
                service_type: dep.service_type,
            })
            .collect();

        Ok(Self {
            order,
            levels,
            dependencies,
        })
    }

    /// Position of an assembly in the startup order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }

    /// Providers an assembly depends on, in declaration order
    pub fn providers_of(&self, name: &str) -> Vec<&str> {
        self.dependencies
            .iter()
            .filter(|dep| dep.consumer == name)
            .map(|dep| dep.provider.as_str())
            .collect()
    }
}

impl fmt::Display for AssemblyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Startup order:")?;
        for (position, name) in self.order.iter().enumerate() {
            let providers = self.providers_of(name);
            if providers.is_empty() {
                writeln!(f, "  {}. {name}", position + 1)?;
            } else {
                writeln!(f, "  {}. {name} (after {})", position + 1, providers.join(", "))?;
            }
        }
        writeln!(f, "Levels:")?;
        for (level, names) in self.levels.iter().enumerate() {
            writeln!(f, "  {level}: {}", names.join(", "))?;
        }
        Ok(())
    }
}
