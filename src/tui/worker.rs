//! Background upload worker.
//!
//! Runs the dataset import on its own thread so the TUI main loop keeps
//! drawing while the (simulated) processing delay elapses.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::ports::{DatasetImporter, ImportReceipt};

/// Progress updates from the upload worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadProgress {
    /// Import started
    Processing,
    /// Dataset accepted
    Complete(ImportReceipt),
    /// Import rejected
    Error(String),
}

/// Handle to a running upload worker.
pub struct UploadWorkerHandle {
    /// Receiver for progress updates
    pub progress_rx: Receiver<UploadProgress>,
    _handle: JoinHandle<()>,
}

impl UploadWorkerHandle {
    /// Try to receive the next progress update (non-blocking).
    #[must_use]
    pub fn try_recv(&self) -> Option<UploadProgress> {
        self.progress_rx.try_recv().ok()
    }
}

/// Worker that runs a dataset import in the background.
pub struct UploadWorker;

impl UploadWorker {
    /// Spawn a background import.
    ///
    /// Returns a handle to receive progress updates.
    pub fn spawn<I>(importer: Arc<I>, path: PathBuf) -> UploadWorkerHandle
    where
        I: DatasetImporter + ?Sized + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            Self::run_import(importer.as_ref(), path, &tx);
        });

        UploadWorkerHandle {
            progress_rx: rx,
            _handle: handle,
        }
    }

    fn run_import<I>(importer: &I, path: PathBuf, tx: &Sender<UploadProgress>)
    where
        I: DatasetImporter + ?Sized,
    {
        let _ = tx.send(UploadProgress::Processing);

        match importer.import(&path) {
            Ok(receipt) => {
                tracing::info!("Dataset accepted: {}", receipt.file_name);
                let _ = tx.send(UploadProgress::Complete(receipt));
            }
            Err(e) => {
                tracing::warn!("Dataset rejected: {}", e);
                let _ = tx.send(UploadProgress::Error(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SimulatedImporter;
    use std::time::Duration;

    fn drain(handle: &UploadWorkerHandle) -> Vec<UploadProgress> {
        handle.progress_rx.iter().collect()
    }

    #[test]
    fn test_worker_reports_completion() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("patients.xlsx");
        std::fs::write(&path, b"").expect("Should write");

        let importer = Arc::new(SimulatedImporter::new(Duration::from_millis(10)));
        let handle = UploadWorker::spawn(importer, path);
        let updates = drain(&handle);

        assert_eq!(updates.first(), Some(&UploadProgress::Processing));
        assert!(matches!(
            updates.last(),
            Some(UploadProgress::Complete(r)) if r.file_name == "patients.xlsx"
        ));
    }

    #[test]
    fn test_worker_reports_error() {
        let importer = Arc::new(SimulatedImporter::new(Duration::ZERO));
        let handle = UploadWorker::spawn(importer, PathBuf::from("/missing/patients.xls"));
        let updates = drain(&handle);

        assert!(matches!(updates.last(), Some(UploadProgress::Error(msg)) if msg.contains("not found")));
    }
}
