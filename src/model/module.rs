use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Execution boundary a module belongs to. Client iff the file carries a
/// leading `use client` directive; everything else defaults to Server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryType {
    Server,
    Client,
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryType::Server => write!(f, "server"),
            BoundaryType::Client => write!(f, "client"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub path: PathBuf,
    pub name: String,
    pub boundary: BoundaryType,
    /// Import specifiers exactly as written, in document order, duplicates kept.
    pub imports: Vec<String>,
    /// Indices into the registry, filled during the resolution pass.
    /// Order and duplicates carry over from `imports`.
    pub dependencies: Vec<usize>,
}

impl Module {
    pub fn new(path: PathBuf, name: String, boundary: BoundaryType, imports: Vec<String>) -> Self {
        Self {
            path,
            name,
            boundary,
            imports,
            dependencies: Vec::new(),
        }
    }
}
