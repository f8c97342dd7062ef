use crate::model::{AnalysisResult, BoundaryType};
use crate::output::OutputFormatter;
use petgraph::visit::EdgeRef;
use std::io::Write;

/// Renders the dependency graph in Graphviz DOT, with violating edges drawn
/// dashed and red.
pub struct DotOutput;

impl DotOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DotOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for DotOutput {
    fn format<W: Write>(&self, result: &AnalysisResult, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "digraph ComponentDependencies {{")?;
        writeln!(writer, "    rankdir=TB;")?;
        writeln!(writer, "    node [shape=box];")?;
        writeln!(writer)?;

        writeln!(writer, "    // Component nodes")?;
        for (index, module) in result.modules.iter().enumerate() {
            let (color, style) = match module.boundary {
                BoundaryType::Server => ("lightblue", "filled"),
                BoundaryType::Client => ("lightyellow", "filled,rounded"),
            };
            writeln!(
                writer,
                "    node{index} [label=\"{}\", fillcolor=\"{color}\", style=\"{style}\"];",
                module.name
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "    // Dependencies")?;
        for edge in result.dependency_graph.edge_references() {
            let from = edge.source().index();
            let to = edge.target().index();
            let violation = result.modules[from].boundary == BoundaryType::Server
                && result.modules[to].boundary == BoundaryType::Client;
            let (color, style) = if violation {
                ("red", "dashed")
            } else {
                ("black", "solid")
            };
            writeln!(
                writer,
                "    node{from} -> node{to} [color=\"{color}\", style=\"{style}\"];"
            )?;
        }

        if !result.violations.is_empty() {
            writeln!(writer)?;
            writeln!(
                writer,
                "    // Warnings: {} server-to-client dependencies",
                result.violations.len()
            )?;
        }

        writeln!(writer, "}}")
    }
}
