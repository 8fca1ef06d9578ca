//! Simulated dataset importer.
//!
//! Validates the file name, waits a fixed delay to mimic processing, and
//! reports success. File contents are never opened.

use std::path::Path;
use std::time::Duration;

use crate::config::DEFAULT_UPLOAD_DELAY;
use crate::ports::{has_accepted_extension, DatasetImporter, ImportError, ImportReceipt};

/// Importer that accepts any existing `.xlsx`/`.xls` file after a delay.
#[derive(Debug, Clone)]
pub struct SimulatedImporter {
    delay: Duration,
}

impl Default for SimulatedImporter {
    fn default() -> Self {
        Self::new(DEFAULT_UPLOAD_DELAY)
    }
}

impl SimulatedImporter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl DatasetImporter for SimulatedImporter {
    fn check(&self, path: &Path) -> Result<(), ImportError> {
        if path.as_os_str().is_empty() {
            return Err(ImportError::Empty);
        }
        if !has_accepted_extension(path) {
            return Err(ImportError::UnsupportedFormat(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(ImportError::NotFound(path.to_path_buf()));
        }
        Ok(())
    }

    fn import(&self, path: &Path) -> Result<ImportReceipt, ImportError> {
        self.check(path)?;

        tracing::debug!("Simulating dataset processing for {:?}", self.delay);
        std::thread::sleep(self.delay);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(ImportReceipt {
            file_name,
            accepted_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_rejects_wrong_extension_before_existence() {
        let importer = SimulatedImporter::new(Duration::ZERO);
        let path = PathBuf::from("/no/such/dir/patients.csv");
        assert_eq!(
            importer.check(&path),
            Err(ImportError::UnsupportedFormat(path.clone()))
        );
    }

    #[test]
    fn test_rejects_missing_file() {
        let importer = SimulatedImporter::new(Duration::ZERO);
        let path = PathBuf::from("/no/such/dir/patients.xlsx");
        assert_eq!(importer.check(&path), Err(ImportError::NotFound(path.clone())));
    }

    #[test]
    fn test_rejects_empty_path() {
        let importer = SimulatedImporter::new(Duration::ZERO);
        assert_eq!(importer.check(Path::new("")), Err(ImportError::Empty));
    }

    #[test]
    fn test_imports_existing_spreadsheet() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("Cohort.XLSX");
        std::fs::write(&path, b"not really a spreadsheet").expect("Should write");

        let importer = SimulatedImporter::new(Duration::from_millis(5));
        let receipt = importer.import(&path).expect("Should import");
        assert_eq!(receipt.file_name, "Cohort.XLSX");
    }
}
