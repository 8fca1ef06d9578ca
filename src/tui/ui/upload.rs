//! Dataset upload view with the welcome panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::{render_header, render_key_hints};
use crate::ports::ImportReceipt;
use crate::tui::styles::MedicalTheme;

/// Where the current upload stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Processing { progress: f64 },
    Done { receipt: ImportReceipt },
    Failed { message: String },
}

/// Upload screen state
#[derive(Debug, Clone, Default)]
pub struct UploadState {
    /// Path typed by the user
    pub path: String,
    pub phase: UploadPhase,
}

impl UploadState {
    pub fn input_char(&mut self, c: char) {
        if !c.is_control() {
            self.path.push(c);
            if matches!(self.phase, UploadPhase::Failed { .. }) {
                self.phase = UploadPhase::Idle;
            }
        }
    }

    pub fn delete_char(&mut self) {
        self.path.pop();
    }

    pub fn clear(&mut self) {
        self.path.clear();
        if !self.is_processing() {
            self.phase = UploadPhase::Idle;
        }
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        matches!(self.phase, UploadPhase::Processing { .. })
    }
}

/// Render the upload screen
pub fn render_upload(f: &mut Frame, area: Rect, state: &UploadState, has_data: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Path input
            Constraint::Length(5), // Status
            Constraint::Length(8), // Expected columns
            Constraint::Min(0),    // Welcome
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "Upload Patient Data",
        "Excel file with patient health metrics",
    );
    render_path_input(f, chunks[1], state);
    render_status(f, chunks[2], state);
    render_expected_columns(f, chunks[3]);

    if !has_data && !state.is_processing() {
        render_welcome(f, chunks[4]);
    }

    render_key_hints(
        f,
        chunks[5],
        &[
            ("Enter", "Upload"),
            ("Del", "Clear"),
            ("F1", "Patient Risk"),
            ("Ctrl+Q", "Quit"),
        ],
    );
}

fn render_path_input(f: &mut Frame, area: Rect, state: &UploadState) {
    let block = Block::default()
        .title(Span::styled(" File path (.xlsx / .xls) ", MedicalTheme::focused()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border_focused());

    let value = if state.path.is_empty() {
        Span::styled("e.g. data/patients.xlsx", MedicalTheme::text_muted())
    } else {
        Span::styled(state.path.as_str(), MedicalTheme::text())
    };

    let input = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        value,
        Span::styled("▌", MedicalTheme::focused()),
    ]))
    .block(block);

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect, state: &UploadState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    match &state.phase {
        UploadPhase::Idle => {
            let p = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Drop in the path to your Excel file and press [Enter]",
                    MedicalTheme::text_secondary(),
                )),
                Line::from(Span::styled(
                    "Analysis and Prediction unlock once a dataset is uploaded",
                    MedicalTheme::text_muted(),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(p, area);
        }
        UploadPhase::Processing { progress } => {
            let gauge = Gauge::default()
                .block(block.title(Span::styled(
                    " Processing patient data... ",
                    MedicalTheme::subtitle(),
                )))
                .gauge_style(MedicalTheme::info())
                .ratio(progress.clamp(0.0, 1.0))
                .label(format!("{:.0}%", progress * 100.0));
            f.render_widget(gauge, area);
        }
        UploadPhase::Done { receipt } => {
            let p = Paragraph::new(vec![
                Line::from(Span::styled(
                    "OK File uploaded successfully!",
                    MedicalTheme::success(),
                )),
                Line::from(vec![
                    Span::styled(receipt.file_name.as_str(), MedicalTheme::text()),
                    Span::styled(
                        format!(
                            " accepted at {}. Patient data is ready for analysis.",
                            receipt.accepted_at.format("%H:%M:%S")
                        ),
                        MedicalTheme::text_secondary(),
                    ),
                ]),
            ])
            .alignment(Alignment::Center)
            .block(block.border_style(MedicalTheme::success()));
            f.render_widget(p, area);
        }
        UploadPhase::Failed { message } => {
            let p = Paragraph::new(vec![
                Line::from(Span::styled("! Upload failed", MedicalTheme::danger())),
                Line::from(Span::styled(message.as_str(), MedicalTheme::text())),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block.border_style(MedicalTheme::danger()));
            f.render_widget(p, area);
        }
    }
}

fn render_expected_columns(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let list = |title: &'static str, items: &[&'static str]| {
        let lines: Vec<Line> = items
            .iter()
            .map(|item| Line::from(Span::styled(format!("  • {item}"), MedicalTheme::text_secondary())))
            .collect();
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(format!(" {title} "), MedicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
    };

    f.render_widget(
        list(
            "Required Columns",
            &[
                "Age",
                "Gender",
                "Heart Rate",
                "Blood Pressure (Systolic/Diastolic)",
            ],
        ),
        columns[0],
    );
    f.render_widget(
        list(
            "Additional Metrics",
            &["Blood Sugar", "CK-MB Levels", "Troponin Levels", "Result (Outcome)"],
        ),
        columns[1],
    );
}

fn render_welcome(f: &mut Frame, area: Rect) {
    let features = [
        ("Patient Risk", "Individual risk assessment"),
        ("Upload Data", "Excel files with patient metrics"),
        ("Analyze Risk", "Cohort visualizations"),
        ("Predict Outcomes", "Model performance"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to CardioAnalytics",
            MedicalTheme::subtitle(),
        )),
        Line::from(Span::styled(
            "Heart attack risk prediction and cohort analysis",
            MedicalTheme::text_secondary(),
        )),
        Line::from(""),
    ];
    lines.extend(features.iter().map(|(name, desc)| {
        Line::from(vec![
            Span::styled(format!("{name}: "), MedicalTheme::text()),
            Span::styled(*desc, MedicalTheme::text_muted()),
        ])
    }));

    let welcome = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(welcome, area);
}
