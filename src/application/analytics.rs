//! Analytics service: read-only views over the cohort dataset.

use crate::domain::cohort::{AgeRiskBucket, Biomarker, FeatureImportance, TierShare};
use crate::domain::CohortSnapshot;

/// Service for cohort analytics.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    cohort: CohortSnapshot,
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new(CohortSnapshot::sample())
    }
}

impl AnalyticsService {
    #[must_use]
    pub fn new(cohort: CohortSnapshot) -> Self {
        Self { cohort }
    }

    #[must_use]
    pub fn snapshot(&self) -> &CohortSnapshot {
        &self.cohort
    }

    /// Age group with the highest risk percentage.
    #[must_use]
    pub fn peak_age_group(&self) -> Option<&AgeRiskBucket> {
        self.cohort.age_risk.iter().max_by_key(|b| b.risk)
    }

    /// Total patients across all age groups.
    #[must_use]
    pub fn patients_by_age(&self) -> u32 {
        self.cohort.age_risk.iter().map(|b| b.patients).sum()
    }

    /// The `n` most important model features, highest first.
    #[must_use]
    pub fn top_features(&self, n: usize) -> Vec<FeatureImportance> {
        let mut features = self.cohort.feature_importance.clone();
        features.sort_by(|a, b| b.importance.cmp(&a.importance));
        features.truncate(n);
        features
    }

    /// Min and max of one biomarker across the trend window.
    #[must_use]
    pub fn biomarker_range(&self, marker: Biomarker) -> Option<(f64, f64)> {
        let mut values = self.cohort.biomarkers.iter().map(|s| marker.read(s));
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Risk tier holding the largest share of the cohort.
    #[must_use]
    pub fn dominant_tier(&self) -> Option<TierShare> {
        self.cohort
            .tier_distribution
            .iter()
            .copied()
            .max_by_key(|t| t.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskLevel;

    #[test]
    fn test_peak_age_group() {
        let service = AnalyticsService::default();
        let peak = service.peak_age_group().expect("Should have buckets");
        assert_eq!(peak.age_group, "70+");
        assert_eq!(peak.risk, 62);
    }

    #[test]
    fn test_patient_total() {
        assert_eq!(AnalyticsService::default().patients_by_age(), 1318);
    }

    #[test]
    fn test_top_features() {
        let top = AnalyticsService::default().top_features(2);
        let names: Vec<&str> = top.iter().map(|f| f.feature).collect();
        assert_eq!(names, vec!["Troponin Levels", "CK-MB Levels"]);
    }

    #[test]
    fn test_biomarker_range() {
        let service = AnalyticsService::default();
        assert_eq!(service.biomarker_range(Biomarker::CkMb), Some((145.0, 192.0)));
        assert_eq!(service.biomarker_range(Biomarker::HeartRate), Some((78.0, 91.0)));
    }

    #[test]
    fn test_empty_cohort() {
        let mut cohort = CohortSnapshot::sample();
        cohort.biomarkers.clear();
        cohort.tier_distribution.clear();
        let service = AnalyticsService::new(cohort);

        assert_eq!(service.biomarker_range(Biomarker::Troponin), None);
        assert!(service.dominant_tier().is_none());
    }

    #[test]
    fn test_dominant_tier() {
        let tier = AnalyticsService::default().dominant_tier().expect("Should have tiers");
        assert_eq!(tier.level, RiskLevel::Low);
        assert_eq!(tier.percent, 68);
    }
}
