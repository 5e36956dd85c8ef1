//! Raw line length scan.

use marklint_ast::Position;

use crate::{DiagnosticSink, LineMask, LintContext};

/// Reports every unmasked line longer than `threshold` characters.
///
/// Lines are visited in ascending order. The report points just past the
/// last character of the line.
pub fn scan_line_lengths(
    ctx: &LintContext<'_>,
    mask: &LineMask,
    threshold: u32,
    sink: &mut dyn DiagnosticSink,
) {
    for (line, text) in ctx.lines() {
        if mask.contains(line) {
            continue;
        }

        let length = text.chars().count() as u32;
        if length > threshold {
            sink.warn(
                format!("Line must be at most {} characters", threshold),
                Position::new(line, length + 1),
            );
        }
    }
}
