use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Extra directory names skipped during file discovery.
    pub exclude: Vec<String>,
    /// Collapse repeated imports of the same target into a single edge.
    /// Off by default: a duplicated import statement then counts as a
    /// duplicated dependency and a duplicated violation.
    pub dedupe_edges: bool,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    analysis: Option<RawAnalysis>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAnalysis {
    exclude: Option<Vec<String>>,
    dedupe_edges: Option<bool>,
}

impl Config {
    /// Load `.rscmap.toml` from the project root, falling back to defaults
    /// when the file is absent.
    pub fn load(project_path: &Path) -> Result<Self, ConfigError> {
        let config_path = project_path.join(".rscmap.toml");

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let raw: RawConfig = toml::from_str(&content)?;
        let analysis = raw.analysis.unwrap_or_default();

        Ok(Self {
            exclude: analysis.exclude.unwrap_or_default(),
            dedupe_edges: analysis.dedupe_edges.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert!(config.exclude.is_empty());
        assert!(!config.dedupe_edges);
    }

    #[test]
    fn loads_analysis_table() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".rscmap.toml"),
            "[analysis]\nexclude = [\"storybook-static\"]\ndedupe_edges = true\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.exclude, vec!["storybook-static"]);
        assert!(config.dedupe_edges);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".rscmap.toml"), "[analysis\n").unwrap();

        assert!(matches!(
            Config::load(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
