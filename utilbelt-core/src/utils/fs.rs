//! Filesystem Utilities.
//!
//! Maps `std::io::Error` into [`CoreError::Filesystem`], keeping the
//! offending path alongside the error.

use crate::error::CoreError;
use std::fs;
use std::path::Path;

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// # Errors
///
/// Returns [`CoreError::Filesystem`] if the path exists but is not a
/// directory, or if creating it fails.
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(CoreError::Filesystem {
            message: "Path exists but is not a directory".to_string(),
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Path exists but is not a directory",
            ),
        });
    }

    fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
        message: "Failed to create directory".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}
