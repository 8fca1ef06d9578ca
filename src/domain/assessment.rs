//! Risk assessment result types.
//!
//! Represents the output of the vitals-based heart attack risk scorer.

use serde::{Deserialize, Serialize};

use super::vitals::PatientVitals;

/// Risk tier for heart attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score 0-30
    Low,
    /// Score 31-60
    Moderate,
    /// Score 61-100
    High,
}

impl RiskLevel {
    /// Upper bound (inclusive) of the Low tier.
    pub const LOW_MAX: u8 = 30;

    /// Upper bound (inclusive) of the Moderate tier.
    pub const MODERATE_MAX: u8 = 60;

    /// Tier for a clamped score.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score <= Self::LOW_MAX {
            Self::Low
        } else if score <= Self::MODERATE_MAX {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Immediate consultation advised",
        }
    }

    /// Score band shown under the risk gauge.
    #[must_use]
    pub fn band(&self) -> &'static str {
        match self {
            Self::Low => "0-30%",
            Self::Moderate => "31-60%",
            Self::High => "61-100%",
        }
    }

    /// The three general recommendations that head every list for this tier.
    #[must_use]
    pub fn template(&self) -> [&'static str; 3] {
        match self {
            Self::High => [
                "Immediate medical consultation required",
                "Consider emergency cardiac evaluation",
                "Monitor vital signs closely",
            ],
            Self::Moderate => [
                "Schedule follow-up with cardiologist",
                "Regular monitoring of cardiac biomarkers",
                "Lifestyle modifications recommended",
            ],
            Self::Low => [
                "Continue regular health checkups",
                "Maintain healthy lifestyle",
                "Monitor blood pressure regularly",
            ],
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (16, 185, 129),      // Emerald (#10B981)
            Self::Moderate => (251, 191, 36), // Amber (#FBBF24)
            Self::High => (244, 63, 94),      // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

/// A scoring rule that fired, with the points it added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub factor: RiskFactor,
    /// Human-readable rule, e.g. "troponin > 0.4"
    pub rule: &'static str,
    pub points: u8,
}

/// Inputs that carry weight in the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    Age,
    Gender,
    HeartRate,
    BloodPressure,
    BloodSugar,
    CkMb,
    Troponin,
}

impl RiskFactor {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::HeartRate => "Heart Rate",
            Self::BloodPressure => "Blood Pressure",
            Self::BloodSugar => "Blood Sugar",
            Self::CkMb => "CK-MB",
            Self::Troponin => "Troponin",
        }
    }
}

/// Per-factor rating shown in the results breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRating {
    pub factor: RiskFactor,
    /// Display value, e.g. "150/95" for blood pressure
    pub value: String,
    pub rating: RiskLevel,
}

/// Output of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Clamped score, 0-100
    pub score: u8,
    pub level: RiskLevel,
    /// At most six entries, tier template first
    pub recommendations: Vec<String>,
    /// Rules that fired, in table order
    pub contributions: Vec<Contribution>,
}

impl RiskAssessment {
    /// Sum of triggered points before clamping.
    #[must_use]
    pub fn raw_points(&self) -> u32 {
        self.contributions.iter().map(|c| u32::from(c.points)).sum()
    }

    #[must_use]
    pub fn was_clamped(&self) -> bool {
        self.raw_points() > u32::from(self.score)
    }
}

/// Complete assessment record for display or export.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub vitals: PatientVitals,
    pub assessment: RiskAssessment,
    pub factors: Vec<FactorRating>,
    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(31), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(61), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
    }

    #[test]
    fn test_raw_points_and_clamp_flag() {
        let assessment = RiskAssessment {
            score: 100,
            level: RiskLevel::High,
            recommendations: Vec::new(),
            contributions: vec![
                Contribution {
                    factor: RiskFactor::Troponin,
                    rule: "troponin > 0.4",
                    points: 30,
                },
                Contribution {
                    factor: RiskFactor::Age,
                    rule: "age > 60",
                    points: 25,
                },
                Contribution {
                    factor: RiskFactor::CkMb,
                    rule: "CK-MB > 25",
                    points: 20,
                },
                Contribution {
                    factor: RiskFactor::BloodPressure,
                    rule: "systolic > 140 or diastolic > 90",
                    points: 20,
                },
                Contribution {
                    factor: RiskFactor::BloodSugar,
                    rule: "blood sugar > 126",
                    points: 15,
                },
            ],
        };
        assert_eq!(assessment.raw_points(), 110);
        assert!(assessment.was_clamped());
    }
}
