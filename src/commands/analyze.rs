use crate::analysis;
use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::model::AnalysisResult;
use crate::output::{DotOutput, JsonOutput, MermaidOutput, OutputFormatter};
use crate::style;
use std::io::{self, Write};

use super::CommandContext;

pub fn cmd_analyze(args: AnalyzeArgs) -> i32 {
    let ctx = match CommandContext::new(&args.path) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    style::status(&format!(
        "Analyzing components in: {}",
        style::path(&ctx.path)
    ));

    let result = analysis::analyze(&ctx.path, &ctx.config);

    // Format to a buffer first; nothing touches the output file until
    // rendering has succeeded
    let mut buffer = Vec::new();
    let format_result = match args.format {
        OutputFormat::Json => JsonOutput::new().format(&result, &mut buffer),
        OutputFormat::Mermaid => MermaidOutput::new().format(&result, &mut buffer),
        OutputFormat::Dot => DotOutput::new().format(&result, &mut buffer),
    };

    if let Err(e) = format_result {
        style::error(&format!("Failed to format output: {}", e));
        return 1;
    }

    match &args.output {
        Some(output_path) => {
            if let Err(e) = std::fs::write(output_path, &buffer) {
                style::error(&format!("Could not write output file: {}", e));
                return 1;
            }
            style::success(&format!("Analysis saved to: {}", style::path(output_path)));
        }
        None => {
            if let Err(e) = io::stdout().write_all(&buffer) {
                style::error(&format!("Failed to write output: {}", e));
                return 1;
            }
        }
    }

    print_summary(&result, args.verbose);

    // Violations are reported as data and never change the exit code
    0
}

fn print_summary(result: &AnalysisResult, verbose: bool) {
    style::section("Summary");
    println!(
        "{}",
        style::metric("Total modules", result.stats.total_modules)
    );
    println!(
        "{}",
        style::metric("Server modules", result.stats.server_modules)
    );
    println!(
        "{}",
        style::metric("Client modules", result.stats.client_modules)
    );

    if result.violations.is_empty() {
        style::success("No boundary violations found");
    } else {
        style::warning(&format!(
            "{} boundary violation(s)",
            result.stats.violation_count
        ));
        if verbose {
            for violation in &result.violations {
                println!("  - {}", violation.message);
            }
        }
    }
}
