//! Model performance and prediction insights view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph},
    Frame,
};

use super::{ratio, render_header, render_key_hints};
use crate::application::AnalyticsService;
use crate::tui::styles::MedicalTheme;

/// Number of features listed in the importance panel.
const TOP_FEATURES: usize = 8;

/// Render the prediction screen
pub fn render_prediction(f: &mut Frame, area: Rect, analytics: &AnalyticsService) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Performance gauges
            Constraint::Min(10),   // ROC + features
            Constraint::Length(5), // Tier distribution
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "Heart Attack Prediction",
        "Model performance and prediction insights",
    );

    render_performance(f, chunks[1], analytics);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_roc_curve(f, middle[0], analytics);
    render_feature_importance(f, middle[1], analytics);

    render_tier_distribution(f, chunks[3], analytics);

    render_key_hints(
        f,
        chunks[4],
        &[
            ("a", "Analysis"),
            ("u", "Upload"),
            ("r", "Patient Risk"),
            ("q", "Quit"),
        ],
    );
}

fn render_performance(f: &mut Frame, area: Rect, analytics: &AnalyticsService) {
    let metrics = &analytics.snapshot().performance;
    if metrics.is_empty() {
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()])
        .split(area);

    for (metric, cell) in metrics.iter().zip(cells.iter()) {
        let block = Block::default()
            .title(Span::styled(format!(" {} ", metric.name), MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border());
        let inner = block.inner(*cell);
        f.render_widget(block, *cell);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let r = ratio(metric.value);
        let gauge = Gauge::default()
            .gauge_style(MedicalTheme::gauge(r))
            .ratio(r)
            .label(format!("{:.1}%", metric.value));
        f.render_widget(gauge, rows[0]);

        let desc = Paragraph::new(Span::styled(metric.description, MedicalTheme::text_muted()))
            .alignment(Alignment::Center);
        f.render_widget(desc, rows[1]);
    }
}

fn render_roc_curve(f: &mut Frame, area: Rect, analytics: &AnalyticsService) {
    let snapshot = analytics.snapshot();
    let curve: Vec<(f64, f64)> = snapshot.roc.iter().map(|p| (p.fpr, p.tpr)).collect();
    let chance = [(0.0, 0.0), (1.0, 1.0)];

    let datasets = vec![
        Dataset::default()
            .name(format!("Model (AUC = {:.2})", snapshot.reported_auc))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(MedicalTheme::series(1))
            .data(&curve),
        Dataset::default()
            .name("Random")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(MedicalTheme::text_muted())
            .data(&chance),
    ];

    let axis_labels = || vec![Span::raw("0.0"), Span::raw("0.5"), Span::raw("1.0")];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(" ROC Curve ", MedicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("False Positive Rate", MedicalTheme::text_muted()))
                .style(MedicalTheme::text_muted())
                .bounds([0.0, 1.0])
                .labels(axis_labels()),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("True Positive Rate", MedicalTheme::text_muted()))
                .style(MedicalTheme::text_muted())
                .bounds([0.0, 1.0])
                .labels(axis_labels()),
        );

    f.render_widget(chart, area);
}

fn render_feature_importance(f: &mut Frame, area: Rect, analytics: &AnalyticsService) {
    let block = Block::default()
        .title(Span::styled(" Feature Importance ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let features = analytics.top_features(TOP_FEATURES);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); features.len()])
        .split(inner);

    for (feature, row) in features.iter().zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(17), Constraint::Min(5)])
            .split(*row);

        f.render_widget(
            Paragraph::new(Span::styled(feature.feature, MedicalTheme::text_secondary())),
            cols[0],
        );
        f.render_widget(
            Gauge::default()
                .gauge_style(MedicalTheme::info())
                .ratio(ratio(f64::from(feature.importance)))
                .label(format!("{}%", feature.importance)),
            cols[1],
        );
    }
}

fn render_tier_distribution(f: &mut Frame, area: Rect, analytics: &AnalyticsService) {
    let tiers = &analytics.snapshot().tier_distribution;
    if tiers.is_empty() {
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, tiers.len() as u32); tiers.len()])
        .split(area);
    let dominant = analytics.dominant_tier().map(|t| t.level);

    for (tier, cell) in tiers.iter().zip(cells.iter()) {
        let style = MedicalTheme::risk_level(tier.level);
        let border = if dominant == Some(tier.level) {
            style
        } else {
            MedicalTheme::border()
        };

        let content = Paragraph::new(vec![
            Line::from(Span::styled(format!("{}%", tier.percent), style)),
            Line::from(Span::styled(
                format!("{} Risk ({})", tier.level, tier.level.band()),
                MedicalTheme::text_secondary(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));

        f.render_widget(content, *cell);
    }
}
