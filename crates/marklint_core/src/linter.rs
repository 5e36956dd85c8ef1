//! Core linter engine.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use marklint_ast::AstArena;
use marklint_parser::parser_for_extension;

use crate::file_finder::FileFinder;
use crate::file_linter::read_source;
use crate::rules::{Rule, builtin_rules};
use crate::{LintContext, LintResult, LinterConfig, LinterError, Report, RuleOptions, Severity};

/// Result type for lint_files and lint_patterns methods.
///
/// Contains a tuple of:
/// - Successful lint results, in input order
/// - Failed files with their errors (path and error)
pub type LintFilesResult = Result<(Vec<LintResult>, Vec<(PathBuf, LinterError)>), LinterError>;

/// A rule together with the options it runs with.
struct EnabledRule {
    rule: Box<dyn Rule>,
    options: RuleOptions,
    severity: Severity,
}

/// The core linter engine.
///
/// Orchestrates file discovery, parsing and rule execution.
pub struct Linter {
    rules: Vec<EnabledRule>,
    finder: FileFinder,
}

impl Linter {
    /// Creates a new linter with the given configuration.
    pub fn new(config: LinterConfig) -> Result<Self, LinterError> {
        let mut finder = FileFinder::new(&config.include, &config.exclude)?;
        if let Some(base_dir) = &config.base_dir {
            finder = finder.with_root(base_dir);
        }
        let available = builtin_rules();

        for id in config.options.keys() {
            if !available.iter().any(|rule| rule.id() == id) {
                warn!("Unknown rule '{}' in configuration, ignoring", id);
            }
        }

        let rules = available
            .into_iter()
            .filter_map(|rule| {
                let options = config.rule_options(rule.id())?;
                let severity = options.severity().unwrap_or(rule.default_severity());
                Some(EnabledRule {
                    rule,
                    options,
                    severity,
                })
            })
            .collect::<Vec<_>>();

        debug!(
            "Enabled rules: {:?}",
            rules.iter().map(|r| r.rule.id()).collect::<Vec<_>>()
        );

        Ok(Self { rules, finder })
    }

    /// Ids of the rules this linter runs, in order.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.id()).collect()
    }

    /// Lints in-memory `source` as if it were read from `path`.
    ///
    /// The parser is chosen from the extension of `path`. A rule that fails
    /// fails the whole document.
    pub fn lint_source(&self, path: &Path, source: &str) -> Result<LintResult, LinterError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let parser = parser_for_extension(extension);

        let arena = AstArena::new();
        let root = parser
            .parse(&arena, source)
            .map_err(|e| LinterError::parse(e.to_string()))?;
        let ctx = LintContext::new(source);

        let mut diagnostics = Vec::new();
        for enabled in &self.rules {
            let id = enabled.rule.id();
            let mut report = Report::new();
            enabled
                .rule
                .check(&ctx, &root, &enabled.options, &mut report)
                .map_err(|source| LinterError::rule(id, source))?;

            debug!(
                "{}: rule '{}' reported {}",
                path.display(),
                id,
                report.findings().len()
            );
            diagnostics.extend(report.into_diagnostics(id, enabled.severity));
        }

        Ok(LintResult::new(path.to_path_buf(), diagnostics))
    }

    /// Lints a single file from disk.
    pub fn lint_file(&self, path: &Path) -> Result<LintResult, LinterError> {
        debug!("Linting {}", path.display());
        let source = read_source(path)?;
        self.lint_source(path, &source)
    }

    /// Lints a list of files in parallel using rayon.
    ///
    /// Returns a tuple of (successful results, failed files with errors).
    pub fn lint_files(&self, paths: &[PathBuf]) -> LintFilesResult {
        let results: Vec<Result<LintResult, (PathBuf, LinterError)>> = paths
            .par_iter()
            .map(|path| self.lint_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(lint_result) => successes.push(lint_result),
                Err((path, error)) => {
                    warn!("Failed to lint {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        Ok((successes, failures))
    }

    /// Lints files matching the given patterns, relative to the current
    /// directory.
    ///
    /// Include/exclude globs of a configuration loaded from disk are relative
    /// to the configuration file's directory.
    pub fn lint_patterns(&self, patterns: &[String]) -> LintFilesResult {
        let files = self.finder.discover(patterns, Path::new("."))?;
        self.lint_files(&files)
    }
}
