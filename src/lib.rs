pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod model;
pub mod output;
pub mod parser;
pub mod style;

pub use cli::Cli;
pub use commands::cmd_analyze;
pub use config::Config;
pub use model::AnalysisResult;
