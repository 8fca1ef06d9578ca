//! Patient vital signs for heart attack risk scoring.
//!
//! `VitalsInput` holds the raw text typed into the patient form; `parse`
//! turns it into a typed `PatientVitals` or explains what is wrong with it.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::CardioError;

/// Biological sex as recorded on the patient form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}' (expected male or female)")),
        }
    }
}

/// Typed vitals for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientVitals {
    /// Age in years (1-120)
    pub age: u32,

    pub gender: Gender,

    /// Resting heart rate in bpm (30-250)
    pub heart_rate: u32,

    /// Systolic blood pressure in mmHg (70-250)
    #[serde(rename = "systolicBP")]
    pub systolic_bp: u32,

    /// Diastolic blood pressure in mmHg (40-150)
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: u32,

    /// Blood sugar in mg/dL (30-500)
    pub blood_sugar: u32,

    /// CK-MB in ng/mL (0-200)
    #[serde(rename = "ckMB")]
    pub ck_mb: f64,

    /// Troponin in ng/mL (0-50)
    pub troponin: f64,
}

/// The eight inputs of the patient form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VitalField {
    Age,
    Gender,
    HeartRate,
    SystolicBp,
    DiastolicBp,
    BloodSugar,
    CkMb,
    Troponin,
}

/// How a field's text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Decimal,
    Choice,
}

impl VitalField {
    pub const ALL: [Self; 8] = [
        Self::Age,
        Self::Gender,
        Self::HeartRate,
        Self::SystolicBp,
        Self::DiastolicBp,
        Self::BloodSugar,
        Self::CkMb,
        Self::Troponin,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::HeartRate => "Heart Rate",
            Self::SystolicBp => "Systolic BP",
            Self::DiastolicBp => "Diastolic BP",
            Self::BloodSugar => "Blood Sugar",
            Self::CkMb => "CK-MB",
            Self::Troponin => "Troponin",
        }
    }

    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Age => "years",
            Self::Gender => "",
            Self::HeartRate => "bpm",
            Self::SystolicBp | Self::DiastolicBp => "mmHg",
            Self::BloodSugar => "mg/dL",
            Self::CkMb | Self::Troponin => "ng/mL",
        }
    }

    /// Placeholder shown while the field is empty.
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            Self::Age => "years (1-120)",
            Self::Gender => "m = male, f = female",
            Self::HeartRate => "bpm, normal 60-100",
            Self::SystolicBp => "mmHg, typical 90-180",
            Self::DiastolicBp => "mmHg, typical 60-120",
            Self::BloodSugar => "mg/dL, typical 70-200",
            Self::CkMb => "ng/mL, typical 0-50",
            Self::Troponin => "ng/mL, normal <0.04, elevated >0.4",
        }
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Gender => FieldKind::Choice,
            Self::CkMb | Self::Troponin => FieldKind::Decimal,
            _ => FieldKind::Integer,
        }
    }

    /// Accepted inclusive range, `None` for the gender choice.
    #[must_use]
    pub fn range(self) -> Option<(f64, f64)> {
        match self {
            Self::Age => Some((1.0, 120.0)),
            Self::Gender => None,
            Self::HeartRate => Some((30.0, 250.0)),
            Self::SystolicBp => Some((70.0, 250.0)),
            Self::DiastolicBp => Some((40.0, 150.0)),
            Self::BloodSugar => Some((30.0, 500.0)),
            Self::CkMb => Some((0.0, 200.0)),
            Self::Troponin => Some((0.0, 50.0)),
        }
    }
}

/// Raw form values, one string per `VitalField`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize)]
pub struct VitalsInput {
    pub age: String,
    pub gender: String,
    pub heart_rate: String,
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub blood_sugar: String,
    pub ck_mb: String,
    pub troponin: String,
}

impl VitalsInput {
    #[must_use]
    pub fn get(&self, field: VitalField) -> &str {
        match field {
            VitalField::Age => &self.age,
            VitalField::Gender => &self.gender,
            VitalField::HeartRate => &self.heart_rate,
            VitalField::SystolicBp => &self.systolic_bp,
            VitalField::DiastolicBp => &self.diastolic_bp,
            VitalField::BloodSugar => &self.blood_sugar,
            VitalField::CkMb => &self.ck_mb,
            VitalField::Troponin => &self.troponin,
        }
    }

    pub fn get_mut(&mut self, field: VitalField) -> &mut String {
        match field {
            VitalField::Age => &mut self.age,
            VitalField::Gender => &mut self.gender,
            VitalField::HeartRate => &mut self.heart_rate,
            VitalField::SystolicBp => &mut self.systolic_bp,
            VitalField::DiastolicBp => &mut self.diastolic_bp,
            VitalField::BloodSugar => &mut self.blood_sugar,
            VitalField::CkMb => &mut self.ck_mb,
            VitalField::Troponin => &mut self.troponin,
        }
    }

    /// Fields that are empty or whitespace only.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<VitalField> {
        VitalField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Sample patient with moderate findings (used by the form's sample key).
    #[must_use]
    pub fn sample() -> Self {
        Self {
            age: "55".into(),
            gender: "male".into(),
            heart_rate: "80".into(),
            systolic_bp: "135".into(),
            diastolic_bp: "85".into(),
            blood_sugar: "110".into(),
            ck_mb: "10".into(),
            troponin: "0.05".into(),
        }
    }

    /// Validate and convert to `PatientVitals`.
    ///
    /// # Errors
    /// `CardioError::MissingFields` if any field is blank, otherwise
    /// `CardioError::InvalidField` for the first value that does not parse
    /// or falls outside its range.
    pub fn parse(&self) -> Result<PatientVitals, CardioError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CardioError::MissingFields(
                missing.into_iter().map(VitalField::label).collect(),
            ));
        }

        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(|reason| CardioError::InvalidField {
                field: VitalField::Gender.label(),
                reason,
            })?;

        Ok(PatientVitals {
            age: self.integer(VitalField::Age)?,
            gender,
            heart_rate: self.integer(VitalField::HeartRate)?,
            systolic_bp: self.integer(VitalField::SystolicBp)?,
            diastolic_bp: self.integer(VitalField::DiastolicBp)?,
            blood_sugar: self.integer(VitalField::BloodSugar)?,
            ck_mb: self.decimal(VitalField::CkMb)?,
            troponin: self.decimal(VitalField::Troponin)?,
        })
    }

    fn integer(&self, field: VitalField) -> Result<u32, CardioError> {
        let text = self.get(field).trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(field, "Invalid whole number"));
        }
        // Digits too long for u64 are still just an out-of-range number.
        let value = text.parse::<u64>().map_or(f64::INFINITY, |v| v as f64);
        check_range(field, value)?;
        u32::try_from(value as u64).map_err(|_| invalid(field, "Invalid whole number"))
    }

    fn decimal(&self, field: VitalField) -> Result<f64, CardioError> {
        let value: f64 = self
            .get(field)
            .trim()
            .parse()
            .map_err(|_| invalid(field, "Invalid number"))?;
        if !value.is_finite() {
            return Err(invalid(field, "Invalid number"));
        }
        check_range(field, value)?;
        Ok(value)
    }
}

impl From<&PatientVitals> for VitalsInput {
    fn from(v: &PatientVitals) -> Self {
        Self {
            age: v.age.to_string(),
            gender: v.gender.to_string(),
            heart_rate: v.heart_rate.to_string(),
            systolic_bp: v.systolic_bp.to_string(),
            diastolic_bp: v.diastolic_bp.to_string(),
            blood_sugar: v.blood_sugar.to_string(),
            ck_mb: v.ck_mb.to_string(),
            troponin: v.troponin.to_string(),
        }
    }
}

fn invalid(field: VitalField, reason: &str) -> CardioError {
    CardioError::InvalidField {
        field: field.label(),
        reason: reason.to_string(),
    }
}

fn check_range(field: VitalField, value: f64) -> Result<(), CardioError> {
    if let Some((min, max)) = field.range() {
        if !(min..=max).contains(&value) {
            return Err(CardioError::InvalidField {
                field: field.label(),
                reason: format!("Value must be between {min} and {max}"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> VitalsInput {
        VitalsInput {
            age: "65".into(),
            gender: "Male".into(),
            heart_rate: "110".into(),
            systolic_bp: "150".into(),
            diastolic_bp: "95".into(),
            blood_sugar: "130".into(),
            ck_mb: "30".into(),
            troponin: "0.5".into(),
        }
    }

    #[test]
    fn test_parse_valid_input() {
        let vitals = filled().parse().expect("Should parse");
        assert_eq!(vitals.age, 65);
        assert_eq!(vitals.gender, Gender::Male);
        assert_eq!(vitals.systolic_bp, 150);
        assert!((vitals.troponin - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_fields_reported_together() {
        let mut input = filled();
        input.gender.clear();
        input.troponin = "   ".into();

        match input.parse() {
            Err(CardioError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["Gender", "Troponin"]);
            }
            other => panic!("Expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_message() {
        let err = VitalsInput::default().parse().unwrap_err();
        assert!(err.to_string().starts_with("Please fill in all fields"));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        let mut input = filled();
        input.heart_rate = "fast".into();

        match input.parse() {
            Err(CardioError::InvalidField { field, .. }) => assert_eq!(field, "Heart Rate"),
            other => panic!("Expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn test_decimal_in_integer_field_is_rejected() {
        let mut input = filled();
        input.age = "65.5".into();
        assert!(matches!(
            input.parse(),
            Err(CardioError::InvalidField { field: "Age", .. })
        ));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut input = filled();
        input.systolic_bp = "300".into();
        assert!(matches!(
            input.parse(),
            Err(CardioError::InvalidField { field: "Systolic BP", .. })
        ));

        let mut input = filled();
        input.troponin = "NaN".into();
        assert!(input.parse().is_err());
    }

    #[test]
    fn test_overlong_integer_reports_range() {
        for digits in ["12345678901", "123456789012345678901234567890"] {
            let mut input = filled();
            input.age = digits.into();
            let err = input.parse().unwrap_err();
            assert_eq!(err.to_string(), "Age: Value must be between 1 and 120");
        }
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" male ".parse::<Gender>(), Ok(Gender::Male));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_round_trip_through_input() {
        let vitals = filled().parse().expect("Should parse");
        let again = VitalsInput::from(&vitals).parse().expect("Should parse");
        assert_eq!(vitals, again);
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(VitalsInput::sample().parse().is_ok());
    }

    #[test]
    fn test_zeroize_clears_all_fields() {
        let mut input = filled();
        input.zeroize();
        assert_eq!(input.missing_fields().len(), VitalField::ALL.len());
    }
}
