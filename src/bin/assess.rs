//! One-shot heart attack risk assessment from the command line.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin assess -- --age 55 --gender male --heart-rate 80 \
//!     --systolic 135 --diastolic 85 --blood-sugar 110 --ck-mb 10 --troponin 0.05 [--json]
//! ```
//!
//! Prints the score, tier, triggered rules and recommendations. Invalid or
//! missing input exits with status 2.

use anyhow::Result;
use cardio_analytics::application::AssessmentService;
use cardio_analytics::domain::{AssessmentReport, VitalField, VitalsInput};

const USAGE: &str = "Usage: assess --age <years> --gender <male|female> --heart-rate <bpm> \
--systolic <mmHg> --diastolic <mmHg> --blood-sugar <mg/dL> --ck-mb <ng/mL> --troponin <ng/mL> [--json]";

/// Exit status for bad arguments or invalid vitals.
const EXIT_USAGE: i32 = 2;

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Assess { input: VitalsInput, json: bool },
}

fn flag_field(flag: &str) -> Option<VitalField> {
    match flag {
        "--age" => Some(VitalField::Age),
        "--gender" => Some(VitalField::Gender),
        "--heart-rate" => Some(VitalField::HeartRate),
        "--systolic" => Some(VitalField::SystolicBp),
        "--diastolic" => Some(VitalField::DiastolicBp),
        "--blood-sugar" => Some(VitalField::BloodSugar),
        "--ck-mb" => Some(VitalField::CkMb),
        "--troponin" => Some(VitalField::Troponin),
        _ => None,
    }
}

/// Parse arguments (without the program name). Errors are user-facing.
fn parse_args<I>(args: I) -> std::result::Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut input = VitalsInput::default();
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => return Ok(Command::Help),
            flag => {
                let field = flag_field(flag).ok_or_else(|| format!("Unknown arg: {arg}"))?;
                let value = args.next().unwrap_or_default();
                if value.is_empty() {
                    return Err(format!("Missing value for {flag}"));
                }
                *input.get_mut(field) = value;
            }
        }
    }

    Ok(Command::Assess { input, json })
}

fn render_text(report: &AssessmentReport) -> String {
    let a = &report.assessment;
    let mut out = format!(
        "Heart attack risk: {}% ({} risk, {})\n{}\n",
        a.score,
        a.level,
        a.level.band(),
        a.level.description()
    );

    out.push_str("\nTriggered rules:\n");
    if a.contributions.is_empty() {
        out.push_str("  none\n");
    }
    for c in &a.contributions {
        out.push_str(&format!("  +{:<3} {}\n", c.points, c.rule));
    }
    if a.was_clamped() {
        out.push_str(&format!("  ({} points capped at {})\n", a.raw_points(), a.score));
    }

    out.push_str("\nRisk factors:\n");
    for f in &report.factors {
        out.push_str(&format!("  {:<15} {:<10} {}\n", f.factor.label(), f.value, f.rating));
    }

    out.push_str("\nRecommendations:\n");
    for (i, rec) in a.recommendations.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, rec));
    }
    out
}

fn render_json(report: &AssessmentReport) -> cardio_analytics::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn main() -> Result<()> {
    let (input, json) = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Ok(Command::Assess { input, json }) => (input, json),
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            std::process::exit(EXIT_USAGE);
        }
    };

    let report = match AssessmentService::new().assess(&input) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(EXIT_USAGE);
        }
    };

    if json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    fn acute_input() -> VitalsInput {
        VitalsInput {
            age: "65".into(),
            gender: "male".into(),
            heart_rate: "110".into(),
            systolic_bp: "150".into(),
            diastolic_bp: "95".into(),
            blood_sugar: "140".into(),
            ck_mb: "30".into(),
            troponin: "0.5".into(),
        }
    }

    #[test]
    fn test_every_flag_maps_to_a_field() {
        let flags = [
            ("--age", VitalField::Age),
            ("--gender", VitalField::Gender),
            ("--heart-rate", VitalField::HeartRate),
            ("--systolic", VitalField::SystolicBp),
            ("--diastolic", VitalField::DiastolicBp),
            ("--blood-sugar", VitalField::BloodSugar),
            ("--ck-mb", VitalField::CkMb),
            ("--troponin", VitalField::Troponin),
        ];
        for (flag, field) in flags {
            assert_eq!(flag_field(flag), Some(field), "{flag}");
        }
        assert_eq!(flag_field("--cholesterol"), None);
        assert_eq!(flag_field("age"), None);
    }

    #[test]
    fn test_parse_full_command_line() {
        let cmd = parse_args(args(
            "--age 65 --gender male --heart-rate 110 --systolic 150 --diastolic 95 \
             --blood-sugar 140 --ck-mb 30 --troponin 0.5 --json",
        ))
        .expect("Should parse");

        assert_eq!(
            cmd,
            Command::Assess {
                input: acute_input(),
                json: true
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert_eq!(
            parse_args(args("--age 65 --weight 80")),
            Err("Unknown arg: --weight".to_string())
        );
        assert_eq!(
            parse_args(args("--age")),
            Err("Missing value for --age".to_string())
        );
        assert_eq!(parse_args(args("--age 65 -h")), Ok(Command::Help));
    }

    #[test]
    fn test_partial_input_fails_assessment() {
        let Ok(Command::Assess { input, .. }) = parse_args(args("--age 65 --gender male")) else {
            panic!("Should parse");
        };
        let err = AssessmentService::new().assess(&input).unwrap_err();
        assert!(err.to_string().starts_with("Please fill in all fields"));
    }

    #[test]
    fn test_render_text_shows_cap() {
        let report = AssessmentService::new()
            .assess(&acute_input())
            .expect("Should assess");
        let text = render_text(&report);

        assert!(text.starts_with("Heart attack risk: 100% (High risk, 61-100%)"));
        assert!(text.contains("  +30  troponin > 0.4\n"));
        assert!(text.contains("(135 points capped at 100)"));
        assert!(text.contains("  1. Immediate medical consultation required"));
    }

    #[test]
    fn test_render_text_without_rules() {
        let report = AssessmentService::new()
            .assess(&VitalsInput {
                age: "25".into(),
                gender: "female".into(),
                heart_rate: "70".into(),
                systolic_bp: "110".into(),
                diastolic_bp: "70".into(),
                blood_sugar: "90".into(),
                ck_mb: "5".into(),
                troponin: "0.01".into(),
            })
            .expect("Should assess");
        let text = render_text(&report);

        assert!(text.starts_with("Heart attack risk: 0% (Low risk, 0-30%)"));
        assert!(text.contains("Triggered rules:\n  none\n"));
        assert!(!text.contains("capped"));
    }

    #[test]
    fn test_render_json() {
        let report = AssessmentService::new()
            .assess(&VitalsInput::sample())
            .expect("Should assess");
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&report).expect("Should render")).expect("Valid JSON");
        assert_eq!(value["assessment"]["score"], 51);
    }
}
