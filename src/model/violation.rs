use crate::model::Module;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    ServerImportsClient,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::ServerImportsClient => write!(f, "server-imports-client"),
        }
    }
}

/// One dependency edge that breaks the boundary rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
    pub source_path: PathBuf,
    pub target_path: PathBuf,
}

impl Violation {
    pub fn server_imports_client(source: &Module, target: &Module) -> Self {
        Self {
            kind: ViolationKind::ServerImportsClient,
            message: format!(
                "Server component \"{}\" imports client component \"{}\"",
                source.name, target.name
            ),
            source_path: source.path.clone(),
            target_path: target.path.clone(),
        }
    }
}
