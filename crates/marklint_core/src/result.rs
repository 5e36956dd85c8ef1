//! Lint result types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Diagnostic, Severity};

/// Result of linting a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintResult {
    /// Path to the linted file.
    pub path: PathBuf,

    /// Diagnostics, grouped by rule in registry order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn new(path: PathBuf, diagnostics: Vec<Diagnostic>) -> Self {
        Self { path, diagnostics }
    }

    /// Returns true if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns true if anything was reported.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
