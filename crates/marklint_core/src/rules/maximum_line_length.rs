//! `maximum-line-length`: warn when lines are too long.
//!
//! Headings, tables, code blocks, and links or images that cannot be wrapped
//! at the threshold are ignored.

use marklint_ast::TxtNode;
use serde_json::Value;
use tracing::debug;

use super::Rule;
use crate::consistency::positive_integer;
use crate::line_mask::build_line_mask;
use crate::scanner::scan_line_lengths;
use crate::{DiagnosticSink, LintContext, RuleError, RuleOptions};

/// Threshold used when none is configured.
pub const DEFAULT_MAXIMUM_LENGTH: u32 = 80;

pub struct MaximumLineLength;

/// Normalizes a configured threshold; anything but a positive integer falls
/// back to [`DEFAULT_MAXIMUM_LENGTH`].
pub fn threshold_from_value(value: &Value) -> u32 {
    positive_integer(value)
        .and_then(|threshold| u32::try_from(threshold).ok())
        .unwrap_or(DEFAULT_MAXIMUM_LENGTH)
}

impl Rule for MaximumLineLength {
    fn id(&self) -> &'static str {
        "maximum-line-length"
    }

    fn description(&self) -> &'static str {
        "Warn when lines are too long"
    }

    fn default_preferred(&self) -> Value {
        Value::from(DEFAULT_MAXIMUM_LENGTH)
    }

    fn check(
        &self,
        ctx: &LintContext<'_>,
        root: &TxtNode<'_>,
        options: &RuleOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), RuleError> {
        let threshold = threshold_from_value(options.preferred());
        let mask = build_line_mask(root, threshold)?;
        debug!(
            "maximum-line-length: threshold {}, {} masked lines",
            threshold,
            mask.len()
        );

        scan_line_lengths(ctx, &mask, threshold, sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{leaf, loc, located, parent, parse_markdown};
    use crate::{Finding, Report};
    use marklint_ast::{AstArena, NodeType, Position};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn run(source: &str, root: &TxtNode<'_>, preferred: Value) -> Result<Vec<Finding>, RuleError> {
        let ctx = LintContext::new(source);
        let mut report = Report::new();
        MaximumLineLength.check(&ctx, root, &RuleOptions::new(preferred), &mut report)?;
        Ok(report.findings().to_vec())
    }

    fn run_markdown(source: &str, preferred: Value) -> Vec<Finding> {
        let arena = AstArena::new();
        let root = parse_markdown(&arena, source);
        run(source, &root, preferred).unwrap()
    }

    fn positions(findings: &[Finding]) -> Vec<(u32, u32)> {
        findings
            .iter()
            .map(|f| (f.position.line, f.position.column))
            .collect()
    }

    #[rstest]
    #[case(json!(100), 100)]
    #[case(json!(1), 1)]
    #[case(json!(0), 80)]
    #[case(json!(-5), 80)]
    #[case(json!(99.5), 80)]
    #[case(json!(100.0), 100)]
    #[case(json!(true), 80)]
    #[case(json!("wide"), 80)]
    #[case(Value::Null, 80)]
    fn test_threshold_from_value(#[case] value: Value, #[case] expected: u32) {
        assert_eq!(threshold_from_value(&value), expected);
    }

    #[test]
    fn test_code_block_lines_are_skipped() {
        let source = "aaaaa\nbbbbbbbbbbbb\ncccccccccc\nddddddddddddddd";
        let arena = AstArena::new();
        let code = located(leaf(NodeType::CodeBlock), loc((2, 1), (2, 13)));
        let root = parent(&arena, NodeType::Document, loc((1, 1), (4, 16)), &[code]);

        assert_eq!(
            run(source, &root, json!(10)).unwrap(),
            vec![Finding {
                message: "Line must be at most 10 characters".to_string(),
                position: Position::new(4, 16),
            }]
        );
    }

    #[test]
    fn test_generated_code_block_does_not_exempt() {
        let source = "short\nthis line is long";
        let arena = AstArena::new();
        let root = parent(
            &arena,
            NodeType::Document,
            loc((1, 1), (2, 18)),
            &[leaf(NodeType::CodeBlock)],
        );

        assert_eq!(positions(&run(source, &root, json!(10)).unwrap()), vec![(2, 18)]);
    }

    #[test]
    fn test_default_threshold() {
        let long = "word ".repeat(17);
        let findings = run_markdown(long.trim_end(), Value::Null);

        assert_eq!(positions(&findings), vec![(1, 85)]);
        assert_eq!(findings[0].message, "Line must be at most 80 characters");
    }

    #[test]
    fn test_unwrappable_markdown_is_skipped() {
        let source = "# A heading that is far too long for twenty\n\
                      \n\
                      Short line.\n\
                      \n\
                      This paragraph line is too long.\n\
                      \n\
                      ```text\n\
                      a code line that is also far too long\n\
                      ```\n\
                      \n\
                      | a table header | that is too wide |\n\
                      | -------------- | ---------------- |\n";

        assert_eq!(positions(&run_markdown(source, json!(20))), vec![(5, 33)]);
    }

    #[test]
    fn test_inline_code_is_not_skipped() {
        let source = "Run `cargo build --release --locked` now\n";
        assert_eq!(positions(&run_markdown(source, json!(20))), vec![(1, 41)]);
    }

    #[rstest]
    #[case::nothing_after("See [the documentation](https://example.com/docs)", vec![])]
    #[case::punctuation_after("See [the documentation](https://example.com/docs).", vec![])]
    #[case::single_word_after("See [the documentation](https://example.com/docs) end", vec![])]
    #[case::words_after(
        "See [the documentation](https://example.com/docs) and more",
        vec![(1, 59)]
    )]
    #[case::image("An ![architecture diagram](./images/arch.png)", vec![])]
    #[case::link_before_threshold("[a](b) and then a long run of words", vec![(1, 36)])]
    fn test_links_straddling_threshold(#[case] source: &str, #[case] expected: Vec<(u32, u32)>) {
        assert_eq!(positions(&run_markdown(source, json!(20))), expected);
    }

    #[test]
    fn test_multibyte_text_before_straddling_link() {
        let source = "éééééééééééé [docs](https://example.com/docs)";
        assert!(run_markdown(source, json!(20)).is_empty());

        let source = "éééééééééééé [docs](https://example.com/docs) and more";
        assert_eq!(positions(&run_markdown(source, json!(20))), vec![(1, 55)]);
    }

    #[test]
    fn test_malformed_link_position_is_an_error() {
        let arena = AstArena::new();
        let link = located(leaf(NodeType::Link), loc((0, 3), (1, 9)));
        let para = parent(&arena, NodeType::Paragraph, loc((1, 1), (1, 9)), &[link]);
        let root = parent(&arena, NodeType::Document, loc((1, 1), (1, 9)), &[para]);

        assert!(matches!(
            run("see link", &root, json!(5)),
            Err(RuleError::Position(_))
        ));
    }

    #[test]
    fn test_runs_are_deterministic() {
        let source = "one two three four five six\n\n# heading heading heading\n\nseven eight nine ten eleven\n";
        let first = run_markdown(source, json!(10));

        assert_eq!(positions(&first), vec![(1, 28), (5, 28)]);
        assert_eq!(first, run_markdown(source, json!(10)));
    }
}
