//! Dataset import port: the boundary behind the upload screen.
//!
//! The dashboard accepts a spreadsheet of patient metrics. Implementations
//! decide what "importing" means; the shipped adapter only simulates it.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// File extensions the upload screen accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Errors that can occur while importing a dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Please upload an Excel file (.xlsx or .xls)")]
    UnsupportedFormat(PathBuf),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No file selected")]
    Empty,
}

/// Confirmation that a dataset was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReceipt {
    /// File name only, without directories
    pub file_name: String,
    pub accepted_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for dataset import.
pub trait DatasetImporter: Send + Sync {
    /// Cheap up-front validation, run before any background work starts.
    ///
    /// # Errors
    /// Returns `ImportError` if the path can never be imported.
    fn check(&self, path: &Path) -> Result<(), ImportError>;

    /// Import the dataset. May block; callers run it off the UI thread.
    ///
    /// # Errors
    /// Returns `ImportError` if the dataset is rejected.
    fn import(&self, path: &Path) -> Result<ImportReceipt, ImportError>;
}

/// Whether the path ends in an accepted spreadsheet extension (case-insensitive).
#[must_use]
pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}
