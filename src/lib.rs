//! # CardioAnalytics
//!
//! Heart attack risk dashboard for the terminal.
//!
//! This crate provides:
//! - A deterministic risk scorer over eight patient vitals
//! - Cohort analytics views over a built-in sample dataset
//! - Terminal UI with a simulated dataset upload flow
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (vitals, assessments, cohort data) and the scorer
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (simulated importer, log sanitizer)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{score, PatientVitals, RiskAssessment, RiskLevel};

/// Result type for CardioAnalytics operations
pub type Result<T> = std::result::Result<T, CardioError>;

/// Main error type for CardioAnalytics
#[derive(Debug, thiserror::Error)]
pub enum CardioError {
    #[error("Please fill in all fields (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Dataset import failed: {0}")]
    Import(#[from] ports::ImportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
