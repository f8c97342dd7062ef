mod dot;
mod json;
mod mermaid;

pub use dot::DotOutput;
pub use json::JsonOutput;
pub use mermaid::MermaidOutput;

use crate::model::AnalysisResult;
use std::io::Write;

pub trait OutputFormatter {
    fn format<W: Write>(&self, result: &AnalysisResult, writer: &mut W) -> std::io::Result<()>;
}
