use crate::model::{AnalysisResult, BoundaryType};
use crate::output::OutputFormatter;
use petgraph::visit::EdgeRef;
use std::io::Write;

/// Renders the dependency graph as a Mermaid `graph TD` diagram. Server
/// modules get rectangular nodes, client modules rounded ones, and
/// boundary-violating edges a dashed `warning` arrow.
pub struct MermaidOutput;

impl MermaidOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MermaidOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MermaidOutput {
    fn format<W: Write>(&self, result: &AnalysisResult, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "graph TD")?;

        for (index, module) in result.modules.iter().enumerate() {
            let (open, close, class) = match module.boundary {
                BoundaryType::Server => ('[', ']', ":::server"),
                BoundaryType::Client => ('(', ')', ":::client"),
            };
            writeln!(
                writer,
                "    node{index}{open}\"{}\"{close}{class}",
                module.name
            )?;
        }

        for edge in result.dependency_graph.edge_references() {
            let from = edge.source().index();
            let to = edge.target().index();
            let arrow = if is_violation(result, from, to) {
                "-.->|warning|"
            } else {
                "-->"
            };
            writeln!(writer, "    node{from} {arrow} node{to}")?;
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "    classDef server fill:#e1f5fe,stroke:#01579b,stroke-width:2px;"
        )?;
        writeln!(
            writer,
            "    classDef client fill:#fff3e0,stroke:#e65100,stroke-width:2px;"
        )?;

        if !result.violations.is_empty() {
            writeln!(writer)?;
            writeln!(
                writer,
                "    %% Warnings: {} server-to-client dependencies detected",
                result.violations.len()
            )?;
        }

        Ok(())
    }
}

fn is_violation(result: &AnalysisResult, from: usize, to: usize) -> bool {
    result.modules[from].boundary == BoundaryType::Server
        && result.modules[to].boundary == BoundaryType::Client
}
