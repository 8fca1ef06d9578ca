//! Risk assessment results view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::{ratio, render_header, render_key_hints};
use crate::domain::{AssessmentReport, RiskLevel};
use crate::tui::styles::MedicalTheme;

/// Render the results screen for one assessment
pub fn render_results(f: &mut Frame, area: Rect, report: &AssessmentReport) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Score + patient summary
            Constraint::Min(8),    // Recommendations + factors
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "Risk Assessment Results",
        &format!("Assessed at {}", report.assessed_at.format("%Y-%m-%d %H:%M UTC")),
    );

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_score(f, top[0], report);
    render_patient_summary(f, top[1], report);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_recommendations(f, bottom[0], report);
    render_factors(f, bottom[1], report);

    render_key_hints(
        f,
        chunks[3],
        &[
            ("b", "Back to Form"),
            ("n", "New Assessment"),
            ("Esc", "Upload"),
            ("q", "Quit"),
        ],
    );
}

fn level_color(level: RiskLevel) -> Color {
    let (r, g, b) = level.color();
    Color::Rgb(r, g, b)
}

fn render_score(f: &mut Frame, area: Rect, report: &AssessmentReport) {
    let assessment = &report.assessment;
    let color = level_color(assessment.level);

    let block = Block::default()
        .title(Span::styled(" Heart Attack Risk ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio(f64::from(assessment.score)))
        .label(Span::styled(
            format!("{}%", assessment.score),
            MedicalTheme::title(),
        ));
    f.render_widget(gauge, rows[0]);

    let tier = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} Risk", assessment.level),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", assessment.level.band()), MedicalTheme::text_muted()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(tier, rows[1]);

    let description = Paragraph::new(Span::styled(
        assessment.level.description(),
        MedicalTheme::text_secondary(),
    ))
    .alignment(Alignment::Center);
    f.render_widget(description, rows[2]);
}

fn render_patient_summary(f: &mut Frame, area: Rect, report: &AssessmentReport) {
    let v = &report.vitals;
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {label:<15}"), MedicalTheme::text_secondary()),
            Span::styled(value, MedicalTheme::text()),
        ])
    };

    let lines = vec![
        row("Age / Gender", format!("{} years, {}", v.age, v.gender)),
        row("Heart Rate", format!("{} bpm", v.heart_rate)),
        row(
            "Blood Pressure",
            format!("{}/{} mmHg", v.systolic_bp, v.diastolic_bp),
        ),
        row("Blood Sugar", format!("{} mg/dL", v.blood_sugar)),
        row(
            "CK-MB / Trop.",
            format!("{} / {} ng/mL", v.ck_mb, v.troponin),
        ),
    ];

    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Patient Summary ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(summary, area);
}

fn render_recommendations(f: &mut Frame, area: Rect, report: &AssessmentReport) {
    let lines: Vec<Line> = report
        .assessment
        .recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), MedicalTheme::key_hint()),
                Span::styled(rec.as_str(), MedicalTheme::text()),
            ])
        })
        .collect();

    let list = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" Recommendations ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(list, area);
}

fn render_factors(f: &mut Frame, area: Rect, report: &AssessmentReport) {
    let mut lines: Vec<Line> = report
        .factors
        .iter()
        .map(|rating| {
            Line::from(vec![
                Span::styled(format!(" {:<15}", rating.factor.label()), MedicalTheme::text_secondary()),
                Span::styled(format!("{:<10}", rating.value), MedicalTheme::text()),
                Span::styled(rating.rating.to_string(), MedicalTheme::risk_level(rating.rating)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Score breakdown",
        MedicalTheme::focused(),
    )));

    let assessment = &report.assessment;
    if assessment.contributions.is_empty() {
        lines.push(Line::from(Span::styled(
            " No risk rules triggered",
            MedicalTheme::text_muted(),
        )));
    }
    for c in &assessment.contributions {
        lines.push(Line::from(vec![
            Span::styled(format!(" +{:<3}", c.points), MedicalTheme::warning()),
            Span::styled(c.rule, MedicalTheme::text_secondary()),
        ]));
    }
    if assessment.was_clamped() {
        lines.push(Line::from(Span::styled(
            format!(" {} points capped at {}", assessment.raw_points(), assessment.score),
            MedicalTheme::text_muted(),
        )));
    }

    let factors = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Risk Factor Analysis ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(factors, area);
}
