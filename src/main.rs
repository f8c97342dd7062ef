use clap::Parser;
use rscmap::cli::{AnalyzeArgs, Cli, Command};
use rscmap::cmd_analyze;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Some(Command::Analyze(args)) => cmd_analyze(args),
        None => {
            // Bare `rscmap [path]` behaves like `rscmap analyze [path]`
            let args = AnalyzeArgs {
                path: cli.path,
                ..Default::default()
            };
            cmd_analyze(args)
        }
    };

    std::process::exit(exit_code);
}
