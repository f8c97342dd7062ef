use crate::model::{AnalysisResult, BoundaryType, Stats, ViolationKind};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    project_name: &'a str,
    stats: Stats,
    violations: Vec<JsonViolation<'a>>,
    modules: Vec<JsonModule<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonViolation<'a> {
    kind: ViolationKind,
    message: &'a str,
    source_path: String,
    target_path: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonModule<'a> {
    name: &'a str,
    path: String,
    boundary_type: BoundaryType,
    dependencies: Vec<JsonDependency<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDependency<'a> {
    name: &'a str,
    path: String,
    boundary_type: BoundaryType,
}

impl OutputFormatter for JsonOutput {
    fn format<W: Write>(&self, result: &AnalysisResult, writer: &mut W) -> std::io::Result<()> {
        let json_result = JsonResult {
            project_name: &result.project_name,
            stats: result.stats,
            violations: result
                .violations
                .iter()
                .map(|v| JsonViolation {
                    kind: v.kind,
                    message: &v.message,
                    source_path: v.source_path.display().to_string(),
                    target_path: v.target_path.display().to_string(),
                })
                .collect(),
            modules: result
                .modules
                .iter()
                .map(|m| JsonModule {
                    name: &m.name,
                    path: m.path.display().to_string(),
                    boundary_type: m.boundary,
                    dependencies: m
                        .dependencies
                        .iter()
                        .map(|&dep| {
                            let target = &result.modules[dep];
                            JsonDependency {
                                name: &target.name,
                                path: target.path.display().to_string(),
                                boundary_type: target.boundary,
                            }
                        })
                        .collect(),
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&json_result).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)
    }
}
