//! Text output formatter

use marklint_core::LintResult;

pub fn output_text(results: &[LintResult]) {
    for result in results {
        for diag in &result.diagnostics {
            println!(
                "{}:{}:{}  {}  {}  {}",
                result.path.display(),
                diag.loc.line,
                diag.loc.column,
                diag.severity,
                diag.message,
                diag.rule_id
            );
        }
    }

    let total_files = results.len();
    let total_issues: usize = results.iter().map(|r| r.diagnostics.len()).sum();

    println!();
    println!(
        "Checked {} files, found {} issues",
        total_files, total_issues
    );
}
