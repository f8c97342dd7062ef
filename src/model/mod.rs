mod module;
mod violation;

pub use module::{BoundaryType, Module};
pub use violation::{Violation, ViolationKind};

use petgraph::graph::DiGraph;
use serde::Serialize;
use std::path::PathBuf;

pub struct AnalysisResult {
    pub project_name: String,
    pub modules: Vec<Module>,
    pub violations: Vec<Violation>,
    pub stats: Stats,
    /// Node order follows `modules`; edge order follows each module's
    /// dependency order, parallel edges kept.
    pub dependency_graph: DiGraph<PathBuf, ()>,
}

/// Derived counts; never mutated independently of the data they summarize.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_modules: usize,
    pub server_modules: usize,
    pub client_modules: usize,
    pub violation_count: usize,
}

impl Stats {
    pub fn tally(modules: &[Module], violations: &[Violation]) -> Self {
        let client_modules = modules
            .iter()
            .filter(|m| m.boundary == BoundaryType::Client)
            .count();

        Self {
            total_modules: modules.len(),
            server_modules: modules.len() - client_modules,
            client_modules,
            violation_count: violations.len(),
        }
    }
}
