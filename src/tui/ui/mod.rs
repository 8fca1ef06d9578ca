//! UI module: View components for the TUI.

pub mod analysis;
pub mod patient;
pub mod prediction;
pub mod results;
pub mod upload;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::Screen;
use crate::tui::styles::MedicalTheme;

/// Top bar: application title plus one tab per reachable screen.
pub fn render_nav(f: &mut Frame, area: Rect, current: Screen, has_data: bool) {
    let tabs = [
        ("F1", "Patient Risk", Screen::PatientInput),
        ("F2", "Data Upload", Screen::Upload),
        ("F3", "Analysis", Screen::Analysis),
        ("F4", "Prediction", Screen::Prediction),
    ];

    let mut spans = vec![
        Span::styled(" CardioAnalytics", MedicalTheme::title()),
        Span::styled(" │ ", MedicalTheme::text_muted()),
    ];

    for (key, label, screen) in tabs {
        let active = current == screen
            || (screen == Screen::PatientInput && current == Screen::Results);
        let enabled = has_data || !screen.requires_data();

        let style = if active {
            MedicalTheme::selected()
        } else if enabled {
            MedicalTheme::text()
        } else {
            MedicalTheme::text_muted()
        };

        spans.push(Span::styled(format!("[{key}] "), MedicalTheme::key_hint()));
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw("  "));
    }

    let nav = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(
            " Heart Attack Risk Prediction & Analysis",
            MedicalTheme::text_secondary(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(nav, area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: Scores come from a fixed rule set and do not replace professional medical evaluation.",
            MedicalTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Analytics screens show sample cohort data.",
            MedicalTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Standard view header: bold title and a muted subtitle.
pub(crate) fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled(title.to_string(), MedicalTheme::title()),
        Span::styled(format!(" │ {subtitle}"), MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

/// Footer line of `[key] description` pairs.
pub(crate) fn render_key_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!("[{key}] "), MedicalTheme::key_hint()),
                Span::styled(format!("{desc} "), MedicalTheme::key_desc()),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

/// Gauge ratio from a percentage, clamped so the widget never panics.
pub(crate) fn ratio(percent: f64) -> f64 {
    if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
