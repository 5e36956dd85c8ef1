//! Linter error types.

use marklint_ast::PositionError;
use thiserror::Error;

/// Errors that abort a single rule invocation.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    /// A located node carries an unusable position.
    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Errors that can occur during linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("File error: {0}")]
    File(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A rule failed on the document.
    #[error("Rule '{rule_id}' failed: {source}")]
    Rule {
        rule_id: String,
        #[source]
        source: RuleError,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Wraps a rule failure with the id of the rule that raised it.
    pub fn rule(rule_id: impl Into<String>, source: RuleError) -> Self {
        Self::Rule {
            rule_id: rule_id.into(),
            source,
        }
    }
}
