//! Cohort analytics shown on the analysis and prediction screens.
//!
//! The dashboard ships with a fixed sample cohort; uploading a dataset only
//! unlocks these views, it does not recompute them.

use serde::Serialize;

use super::assessment::RiskLevel;

/// Direction of a month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Headline card on the analysis screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeRiskBucket {
    pub age_group: &'static str,
    /// Heart attack risk in percent
    pub risk: u8,
    pub patients: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenderShare {
    pub label: &'static str,
    /// Share of at-risk patients in percent
    pub percent: u8,
}

/// One month of averaged biomarker readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiomarkerSample {
    pub month: &'static str,
    pub ck_mb: f64,
    pub troponin: f64,
    pub heart_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Biomarker {
    CkMb,
    Troponin,
    HeartRate,
}

impl Biomarker {
    pub const ALL: [Self; 3] = [Self::CkMb, Self::Troponin, Self::HeartRate];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CkMb => "CK-MB Levels",
            Self::Troponin => "Troponin Levels",
            Self::HeartRate => "Heart Rate",
        }
    }

    #[must_use]
    pub fn read(self, sample: &BiomarkerSample) -> f64 {
        match self {
            Self::CkMb => sample.ck_mb,
            Self::Troponin => sample.troponin,
            Self::HeartRate => sample.heart_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceMetric {
    pub name: &'static str,
    /// Percent, 0-100
    pub value: f64,
    pub description: &'static str,
}

/// Point on the ROC curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub fpr: f64,
    pub tpr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: &'static str,
    /// Percent, 0-100
    pub importance: u8,
}

/// Share of the cohort in one risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierShare {
    pub level: RiskLevel,
    pub percent: u8,
}

/// Everything the analytics screens render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSnapshot {
    pub metrics: Vec<MetricCard>,
    pub age_risk: Vec<AgeRiskBucket>,
    pub gender_split: Vec<GenderShare>,
    pub biomarkers: Vec<BiomarkerSample>,
    pub performance: Vec<PerformanceMetric>,
    pub reported_auc: f64,
    pub roc: Vec<RocPoint>,
    pub feature_importance: Vec<FeatureImportance>,
    pub tier_distribution: Vec<TierShare>,
}

impl CohortSnapshot {
    /// The built-in sample cohort.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            metrics: vec![
                MetricCard {
                    title: "Total Patients",
                    value: "1,247",
                    change: "+12%",
                    trend: Trend::Up,
                },
                MetricCard {
                    title: "High Risk Patients",
                    value: "187",
                    change: "15%",
                    trend: Trend::Neutral,
                },
                MetricCard {
                    title: "Heart Attack Cases",
                    value: "43",
                    change: "-8%",
                    trend: Trend::Down,
                },
                MetricCard {
                    title: "Recovery Rate",
                    value: "89.2%",
                    change: "+5.1%",
                    trend: Trend::Up,
                },
            ],
            age_risk: vec![
                bucket("20-30", 5, 156),
                bucket("31-40", 12, 234),
                bucket("41-50", 23, 298),
                bucket("51-60", 34, 345),
                bucket("61-70", 48, 198),
                bucket("70+", 62, 87),
            ],
            gender_split: vec![
                GenderShare {
                    label: "Male",
                    percent: 58,
                },
                GenderShare {
                    label: "Female",
                    percent: 42,
                },
            ],
            biomarkers: vec![
                month("Jan", 145.0, 0.8, 78.0),
                month("Feb", 158.0, 1.2, 82.0),
                month("Mar", 162.0, 1.4, 85.0),
                month("Apr", 171.0, 1.8, 88.0),
                month("May", 185.0, 2.1, 91.0),
                month("Jun", 192.0, 2.3, 89.0),
            ],
            performance: vec![
                PerformanceMetric {
                    name: "Accuracy",
                    value: 94.2,
                    description: "Overall prediction accuracy",
                },
                PerformanceMetric {
                    name: "Precision",
                    value: 91.8,
                    description: "Positive prediction accuracy",
                },
                PerformanceMetric {
                    name: "Recall",
                    value: 89.4,
                    description: "True positive detection rate",
                },
                PerformanceMetric {
                    name: "F1-Score",
                    value: 90.6,
                    description: "Harmonic mean of precision and recall",
                },
            ],
            reported_auc: 0.96,
            roc: [
                (0.0, 0.0),
                (0.1, 0.3),
                (0.2, 0.6),
                (0.3, 0.75),
                (0.4, 0.85),
                (0.5, 0.91),
                (0.6, 0.95),
                (0.7, 0.97),
                (0.8, 0.98),
                (0.9, 0.99),
                (1.0, 1.0),
            ]
            .into_iter()
            .map(|(fpr, tpr)| RocPoint { fpr, tpr })
            .collect(),
            feature_importance: [
                ("Troponin Levels", 85),
                ("CK-MB Levels", 78),
                ("Age", 72),
                ("Systolic BP", 64),
                ("Heart Rate", 58),
                ("Blood Sugar", 45),
                ("Gender", 32),
                ("Diastolic BP", 28),
            ]
            .into_iter()
            .map(|(feature, importance)| FeatureImportance {
                feature,
                importance,
            })
            .collect(),
            tier_distribution: vec![
                TierShare {
                    level: RiskLevel::Low,
                    percent: 68,
                },
                TierShare {
                    level: RiskLevel::Moderate,
                    percent: 22,
                },
                TierShare {
                    level: RiskLevel::High,
                    percent: 10,
                },
            ],
        }
    }
}

fn bucket(age_group: &'static str, risk: u8, patients: u32) -> AgeRiskBucket {
    AgeRiskBucket {
        age_group,
        risk,
        patients,
    }
}

fn month(month: &'static str, ck_mb: f64, troponin: f64, heart_rate: f64) -> BiomarkerSample {
    BiomarkerSample {
        month,
        ck_mb,
        troponin,
        heart_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shapes() {
        let cohort = CohortSnapshot::sample();
        assert_eq!(cohort.metrics.len(), 4);
        assert_eq!(cohort.age_risk.len(), 6);
        assert_eq!(cohort.biomarkers.len(), 6);
        assert_eq!(cohort.feature_importance.len(), 8);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let cohort = CohortSnapshot::sample();
        let gender: u32 = cohort.gender_split.iter().map(|g| u32::from(g.percent)).sum();
        let tiers: u32 = cohort
            .tier_distribution
            .iter()
            .map(|t| u32::from(t.percent))
            .sum();
        assert_eq!(gender, 100);
        assert_eq!(tiers, 100);
    }

    #[test]
    fn test_roc_is_monotonic() {
        let roc = CohortSnapshot::sample().roc;
        assert!(roc.windows(2).all(|w| w[0].fpr < w[1].fpr && w[0].tpr <= w[1].tpr));
        assert_eq!(roc.first(), Some(&RocPoint { fpr: 0.0, tpr: 0.0 }));
        assert_eq!(roc.last(), Some(&RocPoint { fpr: 1.0, tpr: 1.0 }));
    }
}
