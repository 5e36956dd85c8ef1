//! File discovery from command line patterns.

use std::borrow::Cow;
use std::path::{self, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::info;
use walkdir::WalkDir;

use crate::LinterError;

/// Resolves patterns to files, honoring configured include/exclude globs.
///
/// With a root set, include/exclude globs match paths relative to that root,
/// which is the directory of the configuration file. Files outside the root
/// match relative to the directory being walked.
#[derive(Debug)]
pub struct FileFinder {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
    root: Option<PathBuf>,
}

impl FileFinder {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, LinterError> {
        Ok(Self {
            include: build_globset(include)?,
            exclude: build_globset(exclude)?,
            root: None,
        })
    }

    /// Resolves include/exclude globs against `root`.
    pub fn with_root(mut self, root: &Path) -> Self {
        self.root = Some(path::absolute(root).unwrap_or_else(|_| root.to_path_buf()));
        self
    }

    /// The path include/exclude globs are matched against.
    fn filter_path<'p>(&self, path: &'p Path, relative: &'p Path) -> Cow<'p, Path> {
        let Some(root) = self.root.as_deref() else {
            return Cow::Borrowed(relative);
        };
        match path::absolute(path) {
            Ok(absolute) => match absolute.strip_prefix(root) {
                Ok(under_root) => Cow::Owned(under_root.to_path_buf()),
                Err(_) => Cow::Borrowed(relative),
            },
            Err(_) => Cow::Borrowed(relative),
        }
    }

    /// Returns true if `path` is filtered out by configuration.
    ///
    /// Exclusion wins over inclusion.
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.exclude.as_ref().is_some_and(|set| set.is_match(path)) {
            return true;
        }
        self.include.as_ref().is_some_and(|set| !set.is_match(path))
    }

    /// Expands `patterns` under `base_dir`.
    ///
    /// A pattern naming an existing file is taken as is; anything else is a
    /// glob matched against every file below `base_dir`. The result is sorted
    /// and free of duplicates.
    pub fn discover(&self, patterns: &[String], base_dir: &Path) -> Result<Vec<PathBuf>, LinterError> {
        let mut files = Vec::new();
        let mut globs = GlobSetBuilder::new();
        let mut has_globs = false;

        for pattern in patterns {
            let path = Path::new(pattern);
            if path.is_file() {
                if !self.is_ignored(&self.filter_path(path, path)) {
                    files.push(path.to_path_buf());
                }
                continue;
            }

            let glob = Glob::new(pattern).map_err(|e| {
                LinterError::config(format!("Invalid pattern '{}': {}", pattern, e))
            })?;
            globs.add(glob);
            has_globs = true;
        }

        if has_globs {
            let globs = globs
                .build()
                .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))?;

            for entry in WalkDir::new(base_dir).into_iter().filter_map(|e| e.ok()) {
                let path = entry.path();
                let relative = path.strip_prefix(base_dir).unwrap_or(path);
                if entry.file_type().is_file()
                    && globs.is_match(relative)
                    && !self.is_ignored(&self.filter_path(path, relative))
                {
                    files.push(path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, LinterError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| LinterError::config(format!("Invalid glob pattern: {}", e)))?;
        builder.add(glob);
    }

    builder
        .build()
        .map(Some)
        .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))
}
