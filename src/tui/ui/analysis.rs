//! Cohort risk analysis view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph},
    Frame,
};

use super::{ratio, render_header, render_key_hints};
use crate::application::AnalyticsService;
use crate::domain::cohort::{Biomarker, MetricCard, Trend};
use crate::tui::styles::MedicalTheme;

/// Render the analysis screen
pub fn render_analysis(f: &mut Frame, area: Rect, analytics: &AnalyticsService) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Metric cards
            Constraint::Min(10),   // Charts
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "Heart Attack Risk Analysis",
        "Cohort analysis of patient health metrics",
    );

    render_metric_cards(f, chunks[1], &analytics.snapshot().metrics);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(charts[0]);

    render_age_chart(f, top[0], analytics);
    render_gender_split(f, top[1], analytics);
    render_biomarker_trends(f, charts[1], analytics);

    render_key_hints(
        f,
        chunks[3],
        &[
            ("p", "Prediction"),
            ("u", "Upload"),
            ("r", "Patient Risk"),
            ("q", "Quit"),
        ],
    );
}

fn render_metric_cards(f: &mut Frame, area: Rect, metrics: &[MetricCard]) {
    if metrics.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, cell) in metrics.iter().zip(cells.iter()) {
        let arrow = match card.trend {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "•",
        };

        let content = Paragraph::new(vec![
            Line::from(Span::styled(card.value, MedicalTheme::title())),
            Line::from(vec![
                Span::styled(format!("{arrow} {}", card.change), MedicalTheme::trend(card.trend)),
                Span::styled(" from last month", MedicalTheme::text_muted()),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", card.title), MedicalTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        );

        f.render_widget(content, *cell);
    }
}

fn render_age_chart(f: &mut Frame, area: Rect, analytics: &AnalyticsService) {
    let buckets = &analytics.snapshot().age_risk;
    let data: Vec<(&str, u64)> = buckets
        .iter()
        .map(|b| (b.age_group, u64::from(b.risk)))
        .collect();

    let title = match analytics.peak_age_group() {
        Some(peak) => format!(" Risk by Age Group (%) │ peak {} ", peak.age_group),
        None => " Risk by Age Group (%) ".to_string(),
    };

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(title, MedicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .data(data.as_slice())
        .bar_width(6)
        .bar_gap(2)
        .max(100)
        .bar_style(MedicalTheme::danger())
        .value_style(MedicalTheme::selected())
        .label_style(MedicalTheme::text_secondary());

    f.render_widget(chart, area);
}

fn render_gender_split(f: &mut Frame, area: Rect, analytics: &AnalyticsService) {
    let block = Block::default()
        .title(Span::styled(" Gender Distribution ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let shares = &analytics.snapshot().gender_split;
    let mut constraints: Vec<Constraint> = shares.iter().map(|_| Constraint::Length(2)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, share) in shares.iter().enumerate() {
        let gauge = Gauge::default()
            .gauge_style(MedicalTheme::series(i + 1))
            .ratio(ratio(f64::from(share.percent)))
            .label(format!("{} {}%", share.label, share.percent));
        f.render_widget(gauge, rows[i]);
    }

    let total = Paragraph::new(Line::from(vec![
        Span::styled("Patients in age buckets: ", MedicalTheme::text_muted()),
        Span::styled(analytics.patients_by_age().to_string(), MedicalTheme::text()),
    ]));
    f.render_widget(total, rows[shares.len()]);
}

fn render_biomarker_trends(f: &mut Frame, area: Rect, analytics: &AnalyticsService) {
    let samples = &analytics.snapshot().biomarkers;

    // Biomarkers live on different scales; plot each as percent of its own peak.
    let series: Vec<(Biomarker, Vec<(f64, f64)>)> = Biomarker::ALL
        .iter()
        .map(|&marker| {
            let peak = analytics
                .biomarker_range(marker)
                .map_or(1.0, |(_, hi)| if hi > 0.0 { hi } else { 1.0 });
            let points = samples
                .iter()
                .enumerate()
                .map(|(i, s)| (i as f64, marker.read(s) / peak * 100.0))
                .collect();
            (marker, points)
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(i, (marker, points))| {
            Dataset::default()
                .name(marker.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(MedicalTheme::series(i))
                .data(points)
        })
        .collect();

    let x_max = samples.len().saturating_sub(1).max(1) as f64;
    let x_labels: Vec<Span> = samples
        .iter()
        .map(|s| Span::styled(s.month, MedicalTheme::text_muted()))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(
                    " Biomarker Trends (% of 6-month peak) ",
                    MedicalTheme::subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .x_axis(
            Axis::default()
                .style(MedicalTheme::text_muted())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(MedicalTheme::text_muted())
                .bounds([0.0, 100.0])
                .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
        );

    f.render_widget(chart, area);
}
