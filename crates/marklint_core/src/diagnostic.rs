//! Diagnostic types for lint results.

use std::fmt;

use marklint_ast::Position;
use serde::{Deserialize, Serialize};

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    Error,
    /// Warning - should be reviewed.
    #[default]
    Warning,
    /// Info - informational message.
    Info,
}

impl Severity {
    /// Parses a configuration severity name. `"off"` is not a severity.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Returns the lowercase name used in configuration and output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic message from a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that generated this diagnostic.
    pub rule_id: String,

    /// The diagnostic message.
    pub message: String,

    /// Where the problem was reported.
    pub loc: Position,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new warning diagnostic.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, loc: Position) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            loc,
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Receives findings from a rule as it runs.
pub trait DiagnosticSink {
    /// Records one finding.
    fn warn(&mut self, message: String, position: Position);
}

/// A message reported by a rule, before it is attributed to the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
    pub position: Position,
}

/// Collects findings in emission order.
#[derive(Debug, Default)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings recorded so far.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Returns true if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Turns the findings into diagnostics attributed to `rule_id`.
    pub fn into_diagnostics(self, rule_id: &str, severity: Severity) -> Vec<Diagnostic> {
        self.findings
            .into_iter()
            .map(|finding| {
                Diagnostic::new(rule_id, finding.message, finding.position).with_severity(severity)
            })
            .collect()
    }
}

impl DiagnosticSink for Report {
    fn warn(&mut self, message: String, position: Position) {
        self.findings.push(Finding { message, position });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new("maximum-line-length", "Too long", Position::new(2, 81));

        assert_eq!(diag.rule_id, "maximum-line-length");
        assert_eq!(diag.message, "Too long");
        assert_eq!(diag.severity, Severity::Warning);
    }

    #[test]
    fn test_diagnostic_serialization() {
        let diag = Diagnostic::new("blockquote-indentation", "Add 1 space", Position::new(3, 2))
            .with_severity(Severity::Error);
        let json = serde_json::to_value(&diag).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "rule_id": "blockquote-indentation",
                "message": "Add 1 space",
                "loc": { "line": 3, "column": 2 },
                "severity": "error"
            })
        );
    }

    #[rstest]
    #[case("error", Some(Severity::Error))]
    #[case("warning", Some(Severity::Warning))]
    #[case("info", Some(Severity::Info))]
    #[case("off", None)]
    #[case("consistent", None)]
    fn test_severity_from_name(#[case] name: &str, #[case] expected: Option<Severity>) {
        assert_eq!(Severity::from_name(name), expected);
    }

    #[test]
    fn test_report_keeps_emission_order() {
        let mut report = Report::new();
        report.warn("second line".to_string(), Position::new(2, 1));
        report.warn("first line".to_string(), Position::new(1, 1));

        let diagnostics = report.into_diagnostics("rule", Severity::Info);
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();

        assert_eq!(messages, vec!["second line", "first line"]);
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Info));
    }
}
