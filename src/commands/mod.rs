mod analyze;

pub use analyze::cmd_analyze;

use crate::config::Config;
use crate::style;
use std::path::{Path, PathBuf};

/// Shared setup for command execution: path resolution and config loading.
pub struct CommandContext {
    pub path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// Returns Err(exit_code) if setup fails.
    pub fn new(path: &Path) -> Result<Self, i32> {
        let resolved_path = match path.canonicalize() {
            Ok(p) => p,
            Err(_) => {
                style::error(&format!("Could not resolve path: {}", style::path(path)));
                return Err(1);
            }
        };

        let config = Config::load(&resolved_path).unwrap_or_else(|e| {
            style::warning(&format!("Failed to load config: {}. Using defaults.", e));
            Config::default()
        });

        Ok(Self {
            path: resolved_path,
            config,
        })
    }
}
