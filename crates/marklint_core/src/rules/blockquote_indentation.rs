//! `blockquote-indentation`: keep the gap between `>` and the quoted content
//! the same across a document.

use marklint_ast::visitor::{Visit, walk_types};
use marklint_ast::{NodeType, SyntaxNode, TxtNode};
use serde_json::Value;

use super::{Rule, plural};
use crate::consistency::{Comparison, ConsistencyTracker, Preference};
use crate::{DiagnosticSink, LintContext, RuleError, RuleOptions};

pub struct BlockquoteIndentation;

impl Rule for BlockquoteIndentation {
    fn id(&self) -> &'static str {
        "blockquote-indentation"
    }

    fn description(&self) -> &'static str {
        "Warn when blockquotes are indented too much or too little"
    }

    fn default_preferred(&self) -> Value {
        Value::from("consistent")
    }

    fn check(
        &self,
        _ctx: &LintContext<'_>,
        root: &TxtNode<'_>,
        options: &RuleOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), RuleError> {
        check_blockquotes(root, Preference::from_value(options.preferred()), sink)
    }
}

/// Compares the indentation of every blockquote under `root`.
///
/// The measured indentation is the column distance from the `>` to the first
/// child, plus any spaces the child's text starts with. Blockquotes that are
/// generated, empty, or whose first child is generated are skipped.
pub fn check_blockquotes<N: SyntaxNode>(
    root: &N,
    preference: Preference,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), RuleError> {
    let mut tracker = ConsistencyTracker::new(preference);

    walk_types(
        root,
        &[NodeType::BlockQuote],
        &mut |visit: Visit<'_, N>| -> Result<(), RuleError> {
            let Some(location) = visit.node.position()? else {
                return Ok(());
            };
            let Some(head) = visit.node.children().first() else {
                return Ok(());
            };
            let Some(head_location) = head.position()? else {
                return Ok(());
            };

            let measured = i64::from(head_location.start.column) - i64::from(location.start.column)
                + leading_spaces(&head.text_content());

            if let Comparison::Differs(delta) = tracker.observe(measured) {
                sink.warn(message(delta), head_location.start);
            }
            Ok(())
        },
    )
}

fn leading_spaces(text: &str) -> i64 {
    text.chars().take_while(|c| *c == ' ').count() as i64
}

fn message(delta: i64) -> String {
    let verb = if delta > 0 { "Add" } else { "Remove" };
    let count = delta.unsigned_abs();
    format!(
        "{} {} {} between blockquote and content",
        verb,
        count,
        plural(count, "space")
    )
}
