//! Output formatting module

mod json;
mod text;

use marklint_core::LintResult;
use miette::Result;

use crate::cli::OutputFormat;

/// Prints `results`; returns true if any file has diagnostics.
pub fn output_results(results: &[LintResult], format: OutputFormat) -> Result<bool> {
    let has_issues = results.iter().any(|r| r.has_diagnostics());

    match format {
        OutputFormat::Json => json::output_json(results)?,
        OutputFormat::Text => text::output_text(results),
    }

    Ok(has_issues)
}
