//! Built-in rules and the registry that lists them.

mod blockquote_indentation;
mod maximum_line_length;

use marklint_ast::TxtNode;
use serde_json::Value;

use crate::{DiagnosticSink, LintContext, RuleError, RuleOptions, Severity};

pub use blockquote_indentation::{BlockquoteIndentation, check_blockquotes};
pub use maximum_line_length::{DEFAULT_MAXIMUM_LENGTH, MaximumLineLength, threshold_from_value};

/// A style check run over one document.
///
/// Rules hold no state between invocations; anything inferred during a run
/// lives in locals of `check`.
pub trait Rule: Send + Sync {
    /// Stable identifier used in configuration and output.
    fn id(&self) -> &'static str;

    /// One-line description.
    fn description(&self) -> &'static str;

    /// Severity used when configuration does not override it.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Preferred value used when configuration does not set one.
    fn default_preferred(&self) -> Value;

    /// Checks `root`, reporting findings to `sink`.
    ///
    /// Returns an error only when the tree itself cannot be read; the
    /// findings reported before the error must be discarded.
    fn check(
        &self,
        ctx: &LintContext<'_>,
        root: &TxtNode<'_>,
        options: &RuleOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), RuleError>;
}

/// Returns the built-in rules in the order they run.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(BlockquoteIndentation), Box::new(MaximumLineLength)]
}

/// Looks up a built-in rule by id.
pub fn find_rule(id: &str) -> Option<Box<dyn Rule>> {
    builtin_rules().into_iter().find(|rule| rule.id() == id)
}

/// `word` or `word` + "s" depending on `count`.
pub(crate) fn plural(count: u64, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
