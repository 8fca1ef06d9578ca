//! Adapters layer: Concrete implementations of ports.
//!
//! - `simulated`: timer-based stand-in for spreadsheet import
//! - `sanitize`: patient-data filtering for logs

pub mod sanitize;
pub mod simulated;

pub use simulated::SimulatedImporter;
