//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a clinical dashboard with:
//! - Dataset upload
//! - Cohort risk analysis and model performance views
//! - Individual patient risk assessment

mod app;
mod styles;
mod ui;
mod worker;

pub use app::{App, Screen};
pub use styles::MedicalTheme;
pub use worker::{UploadProgress, UploadWorker, UploadWorkerHandle};
