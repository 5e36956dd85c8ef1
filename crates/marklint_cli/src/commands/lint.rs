//! Lint command implementation

use marklint_core::{Linter, LinterConfig};
use miette::{IntoDiagnostic, Result};
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::output::output_results;

pub fn run_lint(cli: &Cli, patterns: &[String], format: OutputFormat) -> Result<bool> {
    let config = if let Some(ref path) = cli.config {
        LinterConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    let linter = Linter::new(config).into_diagnostic()?;
    let (results, failures) = linter.lint_patterns(patterns).into_diagnostic()?;

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to lint:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    let has_issues = output_results(&results, format)?;

    Ok(has_issues || !failures.is_empty())
}

fn find_config() -> Result<LinterConfig> {
    if let Some(path) = LinterConfig::discover(".") {
        info!("Using config: {}", path.display());
        return LinterConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(LinterConfig::new())
}
