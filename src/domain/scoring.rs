//! Heart attack risk scorer.
//!
//! Additive threshold model: each factor adds fixed points when its vital
//! crosses a cutoff, and the total is clamped to 100. Every rule is
//! independent, so evaluation order only matters for the order in which
//! contributions and recommendations are listed.

use super::assessment::{Contribution, FactorRating, RiskAssessment, RiskFactor, RiskLevel};
use super::vitals::{Gender, PatientVitals};

/// Upper clamp for the score.
pub const MAX_SCORE: u8 = 100;

/// Recommendation lists are cut to this many entries.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Score a patient.
///
/// Never fails. A NaN in a decimal field fails every comparison and adds
/// nothing for that factor.
#[must_use]
pub fn score(vitals: PatientVitals) -> RiskAssessment {
    let contributions = contributions(&vitals);
    let raw: u32 = contributions.iter().map(|c| u32::from(c.points)).sum();
    let score = raw.min(u32::from(MAX_SCORE)) as u8;
    let level = RiskLevel::from_score(score);

    RiskAssessment {
        score,
        level,
        recommendations: recommendations(level, &vitals),
        contributions,
    }
}

/// Rules that fire for these vitals, in table order.
#[must_use]
pub fn contributions(v: &PatientVitals) -> Vec<Contribution> {
    let mut out = Vec::with_capacity(7);
    let mut add = |factor, rule, points| {
        out.push(Contribution {
            factor,
            rule,
            points,
        })
    };

    if v.age > 60 {
        add(RiskFactor::Age, "age > 60", 25);
    } else if v.age > 50 {
        add(RiskFactor::Age, "age > 50", 15);
    } else if v.age > 40 {
        add(RiskFactor::Age, "age > 40", 10);
    } else if v.age > 30 {
        add(RiskFactor::Age, "age > 30", 5);
    }

    if v.gender == Gender::Male {
        add(RiskFactor::Gender, "male", 10);
    }

    if v.heart_rate > 100 || v.heart_rate < 60 {
        add(RiskFactor::HeartRate, "heart rate > 100 or < 60", 15);
    }

    if v.systolic_bp > 140 || v.diastolic_bp > 90 {
        add(
            RiskFactor::BloodPressure,
            "systolic > 140 or diastolic > 90",
            20,
        );
    } else if v.systolic_bp > 130 || v.diastolic_bp > 80 {
        add(
            RiskFactor::BloodPressure,
            "systolic > 130 or diastolic > 80",
            10,
        );
    }

    if v.blood_sugar > 126 {
        add(RiskFactor::BloodSugar, "blood sugar > 126", 15);
    } else if v.blood_sugar > 100 {
        add(RiskFactor::BloodSugar, "blood sugar > 100", 8);
    }

    if v.ck_mb > 25.0 {
        add(RiskFactor::CkMb, "CK-MB > 25", 20);
    } else if v.ck_mb > 15.0 {
        add(RiskFactor::CkMb, "CK-MB > 15", 10);
    }

    if v.troponin > 0.4 {
        add(RiskFactor::Troponin, "troponin > 0.4", 30);
    } else if v.troponin > 0.1 {
        add(RiskFactor::Troponin, "troponin > 0.1", 15);
    } else if v.troponin > 0.04 {
        add(RiskFactor::Troponin, "troponin > 0.04", 8);
    }

    out
}

/// Tier template followed by metric-specific advice, cut to six.
#[must_use]
pub fn recommendations(level: RiskLevel, v: &PatientVitals) -> Vec<String> {
    let flags = [
        (v.age > 65, "Age-related cardiovascular screening"),
        (v.heart_rate > 100, "Heart rate management consultation"),
        (v.systolic_bp > 140, "Blood pressure management"),
        (v.blood_sugar > 126, "Diabetes screening and management"),
        (v.troponin > 0.4, "Urgent cardiac enzyme evaluation"),
    ];

    level
        .template()
        .into_iter()
        .chain(flags.into_iter().filter(|(hit, _)| *hit).map(|(_, text)| text))
        .take(MAX_RECOMMENDATIONS)
        .map(str::to_string)
        .collect()
}

/// Coarse per-factor ratings for the results breakdown.
///
/// These cutoffs are for display only and are not the scoring rules.
#[must_use]
pub fn factor_ratings(v: &PatientVitals) -> Vec<FactorRating> {
    let age = if v.age > 60 {
        RiskLevel::High
    } else if v.age > 40 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    let pressure = if v.systolic_bp > 140 {
        RiskLevel::High
    } else if v.systolic_bp > 130 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    let heart_rate = if v.heart_rate > 100 || v.heart_rate < 60 {
        RiskLevel::High
    } else {
        RiskLevel::Low
    };

    let troponin = if v.troponin > 0.4 {
        RiskLevel::High
    } else if v.troponin > 0.1 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    vec![
        FactorRating {
            factor: RiskFactor::Age,
            value: v.age.to_string(),
            rating: age,
        },
        FactorRating {
            factor: RiskFactor::BloodPressure,
            value: format!("{}/{}", v.systolic_bp, v.diastolic_bp),
            rating: pressure,
        },
        FactorRating {
            factor: RiskFactor::HeartRate,
            value: v.heart_rate.to_string(),
            rating: heart_rate,
        },
        FactorRating {
            factor: RiskFactor::Troponin,
            value: v.troponin.to_string(),
            rating: troponin,
        },
    ]
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn vitals_strategy() -> impl Strategy<Value = PatientVitals> {
        (
            1u32..=120,
            any::<bool>(),
            30u32..=250,
            70u32..=250,
            40u32..=150,
            30u32..=500,
            0.0..=200.0f64,
            0.0..=50.0f64,
        )
            .prop_map(
                |(age, male, heart_rate, systolic_bp, diastolic_bp, blood_sugar, ck_mb, troponin)| {
                    PatientVitals {
                        age,
                        gender: if male { Gender::Male } else { Gender::Female },
                        heart_rate,
                        systolic_bp,
                        diastolic_bp,
                        blood_sugar,
                        ck_mb,
                        troponin,
                    }
                },
            )
    }

    proptest! {
        /// Score stays within 0-100 and the tier matches it
        #[test]
        fn score_is_bounded(v in vitals_strategy()) {
            let result = score(v);
            prop_assert!(result.score <= MAX_SCORE);
            prop_assert_eq!(result.level, RiskLevel::from_score(result.score));
        }

        #[test]
        fn score_is_deterministic(v in vitals_strategy()) {
            prop_assert_eq!(score(v), score(v));
        }

        /// List is capped and always led by the tier template
        #[test]
        fn recommendations_start_with_template(v in vitals_strategy()) {
            let result = score(v);
            prop_assert!(result.recommendations.len() <= MAX_RECOMMENDATIONS);
            prop_assert!(result.recommendations.len() >= 3);
            for (got, want) in result.recommendations.iter().zip(result.level.template()) {
                prop_assert_eq!(got.as_str(), want);
            }
        }

        /// Raising age, blood sugar, CK-MB or troponin never lowers the score
        #[test]
        fn score_is_monotonic_in_single_factors(
            v in vitals_strategy(),
            bump in 0u32..200,
            bump_f in 0.0..100.0f64,
        ) {
            let base = score(v).score;

            let mut older = v;
            older.age = (v.age + bump).min(120);
            prop_assert!(score(older).score >= base);

            let mut sweeter = v;
            sweeter.blood_sugar = (v.blood_sugar + bump).min(500);
            prop_assert!(score(sweeter).score >= base);

            let mut ck = v;
            ck.ck_mb = (v.ck_mb + bump_f).min(200.0);
            prop_assert!(score(ck).score >= base);

            let mut trop = v;
            trop.troponin = (v.troponin + bump_f).min(50.0);
            prop_assert!(score(trop).score >= base);

            let mut pressure = v;
            pressure.systolic_bp = (v.systolic_bp + bump).min(250);
            pressure.diastolic_bp = (v.diastolic_bp + bump).min(150);
            prop_assert!(score(pressure).score >= base);
        }
    }
}
