//! Reading a single file from disk before linting it.

use std::fs;
use std::path::Path;

use crate::LinterError;

/// Files larger than this are refused.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads `path` as UTF-8 after checking it is a regular file of acceptable size.
pub fn read_source(path: &Path) -> Result<String, LinterError> {
    let metadata = fs::metadata(path).map_err(|e| {
        LinterError::file(format!(
            "Failed to read metadata for {}: {}",
            path.display(),
            e
        ))
    })?;

    if !metadata.is_file() {
        return Err(LinterError::file(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(LinterError::file(format!(
            "File size exceeds limit of {} bytes: {}",
            MAX_FILE_SIZE,
            path.display()
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))
}
