//! Assessment service: validates patient input and runs the risk scorer.
//!
//! Nothing is stored; every call produces a fresh report.

use crate::domain::{scoring, AssessmentReport, PatientVitals, VitalsInput};
use crate::CardioError;

/// Service for individual patient risk assessments.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssessmentService;

impl AssessmentService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate raw form input and score it.
    ///
    /// # Errors
    /// Returns `CardioError::MissingFields` or `CardioError::InvalidField`
    /// when the input does not describe a valid patient. The scorer is not
    /// called in that case.
    pub fn assess(&self, input: &VitalsInput) -> Result<AssessmentReport, CardioError> {
        let vitals = input.parse().map_err(|e| {
            tracing::warn!("Rejected patient input: {}", e);
            e
        })?;
        Ok(self.assess_vitals(vitals))
    }

    /// Score already-validated vitals.
    #[must_use]
    pub fn assess_vitals(&self, vitals: PatientVitals) -> AssessmentReport {
        let assessment = scoring::score(vitals);

        tracing::info!(
            score = assessment.score,
            level = %assessment.level,
            rules = assessment.contributions.len(),
            "Risk assessment completed"
        );
        if assessment.was_clamped() {
            tracing::debug!(
                "Score clamped from {} to {}",
                assessment.raw_points(),
                assessment.score
            );
        }

        AssessmentReport {
            factors: scoring::factor_ratings(&vitals),
            vitals,
            assessment,
            assessed_at: chrono::Utc::now(),
        }
    }
}
