//! # marklint_core
//!
//! Rule engine and linter for marklint.
//!
//! This crate provides:
//! - The two built-in style rules and the registry that lists them
//! - The engines they are built from: consistency inference, line masking
//!   and the raw line length scan
//! - Configuration loading
//! - The `Linter` orchestrator with file discovery and parallel processing
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//! use marklint_core::{Linter, LinterConfig};
//!
//! let config = LinterConfig::from_json(r#"{ "options": { "maximum-line-length": 20 } }"#)?;
//! let linter = Linter::new(config)?;
//!
//! let result = linter.lint_source(Path::new("README.md"), "> quoted\n\n>   again\n")?;
//! for diagnostic in &result.diagnostics {
//!     println!("{} {} {}", diagnostic.loc, diagnostic.message, diagnostic.rule_id);
//! }
//! # Ok::<(), marklint_core::LinterError>(())
//! ```

mod config;
pub mod consistency;
mod context;
mod diagnostic;
mod error;
pub mod file_finder;
mod file_linter;
pub mod line_mask;
mod linter;
mod result;
pub mod rules;
pub mod scanner;

pub use config::{LinterConfig, RuleOption, RuleOptions};
pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSink, Finding, Report, Severity};
pub use error::{LinterError, RuleError};
pub use file_linter::MAX_FILE_SIZE;
pub use line_mask::LineMask;
pub use linter::{LintFilesResult, Linter};
pub use result::LintResult;
pub use rules::{Rule, builtin_rules, find_rule};

#[cfg(test)]
pub mod test_utils;
