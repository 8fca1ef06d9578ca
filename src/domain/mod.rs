//! Domain layer: Core business types and logic.
//!
//! Pure Rust types with no I/O. The risk scorer lives in `scoring`.

mod assessment;
pub mod cohort;
pub mod scoring;
mod vitals;

pub use assessment::{
    AssessmentReport, Contribution, FactorRating, RiskAssessment, RiskFactor, RiskLevel,
};
pub use cohort::CohortSnapshot;
pub use scoring::score;
pub use vitals::{FieldKind, Gender, PatientVitals, VitalField, VitalsInput};
