//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems.

mod importer;

pub use importer::{
    has_accepted_extension, DatasetImporter, ImportError, ImportReceipt, ACCEPTED_EXTENSIONS,
};
