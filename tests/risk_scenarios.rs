use cardio_analytics::application::AssessmentService;
use cardio_analytics::domain::{Gender, RiskFactor, VitalsInput};
use cardio_analytics::{score, CardioError, PatientVitals, RiskLevel};

fn vitals(
    age: u32,
    gender: Gender,
    heart_rate: u32,
    bp: (u32, u32),
    blood_sugar: u32,
    ck_mb: f64,
    troponin: f64,
) -> PatientVitals {
    PatientVitals {
        age,
        gender,
        heart_rate,
        systolic_bp: bp.0,
        diastolic_bp: bp.1,
        blood_sugar,
        ck_mb,
        troponin,
    }
}

#[test]
fn acute_presentation_is_capped() {
    let a = score(vitals(65, Gender::Male, 110, (150, 95), 140, 30.0, 0.5));

    assert_eq!(a.raw_points(), 135);
    assert_eq!(a.score, 100);
    assert_eq!(a.level, RiskLevel::High);
    assert_eq!(
        a.recommendations,
        vec![
            "Immediate medical consultation required",
            "Consider emergency cardiac evaluation",
            "Monitor vital signs closely",
            "Heart rate management consultation",
            "Blood pressure management",
            "Diabetes screening and management",
        ]
    );
}

#[test]
fn healthy_young_woman_scores_zero() {
    let a = score(vitals(25, Gender::Female, 70, (110, 70), 90, 5.0, 0.01));

    assert_eq!(a.score, 0);
    assert_eq!(a.level, RiskLevel::Low);
    assert!(a.contributions.is_empty());
    assert_eq!(a.recommendations.len(), 3);
}

#[test]
fn sample_patient_is_moderate() {
    let a = score(vitals(55, Gender::Male, 80, (135, 85), 110, 10.0, 0.05));

    assert_eq!(a.score, 51);
    assert_eq!(a.level, RiskLevel::Moderate);
    let factors: Vec<RiskFactor> = a.contributions.iter().map(|c| c.factor).collect();
    assert_eq!(
        factors,
        vec![
            RiskFactor::Age,
            RiskFactor::Gender,
            RiskFactor::BloodPressure,
            RiskFactor::BloodSugar,
            RiskFactor::Troponin,
        ]
    );
}

#[test]
fn thresholds_are_strict() {
    let base = vitals(30, Gender::Female, 60, (130, 80), 100, 15.0, 0.04);
    assert_eq!(score(base).score, 0);

    let older = PatientVitals { age: 31, ..base };
    assert_eq!(score(older).score, 5);

    let fast = PatientVitals { heart_rate: 101, ..base };
    assert_eq!(score(fast).score, 15);

    let slow = PatientVitals { heart_rate: 59, ..base };
    assert_eq!(score(slow).score, 15);
}

#[test]
fn tier_boundaries() {
    // 25 + 10 + 15 + 10 = 60
    let sixty = score(vitals(61, Gender::Male, 101, (131, 70), 90, 0.0, 0.0));
    assert_eq!(sixty.score, 60);
    assert_eq!(sixty.level, RiskLevel::Moderate);

    // 60 + 8 = 68
    let high = score(vitals(61, Gender::Male, 101, (131, 70), 101, 0.0, 0.0));
    assert_eq!(high.level, RiskLevel::High);

    // 15 + 15 = 30
    let thirty = score(vitals(51, Gender::Female, 70, (120, 70), 127, 0.0, 0.0));
    assert_eq!(thirty.score, 30);
    assert_eq!(thirty.level, RiskLevel::Low);
}

#[test]
fn service_rejects_blank_fields_before_scoring() {
    let err = AssessmentService::new()
        .assess(&VitalsInput::default())
        .unwrap_err();

    match err {
        CardioError::MissingFields(fields) => assert_eq!(fields.len(), 8),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn service_rejects_non_numeric_input() {
    let mut input = VitalsInput::sample();
    input.heart_rate = "fast".into();

    let err = AssessmentService::new().assess(&input).unwrap_err();
    assert_eq!(err.to_string(), "Heart Rate: Invalid whole number");
}
