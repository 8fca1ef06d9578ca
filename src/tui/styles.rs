//! Clinical color palette and preset styles.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::cohort::Trend;
use crate::domain::RiskLevel;

/// Medical theme color palette.
pub struct MedicalTheme;

impl MedicalTheme {
    // === Primary Colors ===

    /// Deep teal
    pub const PRIMARY: Color = Color::Rgb(13, 148, 136); // #0D9488

    /// Lighter teal for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(45, 212, 191); // #2DD4BF

    /// Light slate for borders
    pub const SECONDARY_LIGHT: Color = Color::Rgb(148, 163, 184); // #94A3B8

    // === Semantic Colors ===

    /// Emerald, low risk
    pub const SUCCESS: Color = Color::Rgb(16, 185, 129); // #10B981

    /// Amber, moderate risk
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24

    /// Rose, high risk
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    pub const INFO: Color = Color::Rgb(59, 130, 246); // #3B82F6

    /// Violet, used for the third chart series
    pub const ACCENT: Color = Color::Rgb(168, 85, 247); // #A855F7

    pub const BG_DARK: Color = Color::Rgb(15, 23, 42); // #0F172A

    // === Text Colors ===

    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for subtitles
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    #[must_use]
    pub fn accent() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Style for selected items
    #[must_use]
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SECONDARY_LIGHT)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Style for key hints
    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Get risk level style
    #[must_use]
    pub fn risk_level(level: RiskLevel) -> Style {
        match level {
            RiskLevel::Low => Self::success(),
            RiskLevel::Moderate => Self::warning(),
            RiskLevel::High => Self::danger(),
        }
    }

    /// Metric card trend arrow color.
    #[must_use]
    pub fn trend(trend: Trend) -> Style {
        match trend {
            Trend::Up => Self::success(),
            Trend::Down => Self::danger(),
            Trend::Neutral => Self::warning(),
        }
    }

    /// Gauge style for model quality metrics (ratio in `0..=1`).
    #[must_use]
    pub fn gauge(ratio: f64) -> Style {
        if ratio >= 0.9 {
            Self::success()
        } else if ratio >= 0.8 {
            Self::info()
        } else {
            Self::warning()
        }
    }

    /// Colors for successive chart series.
    #[must_use]
    pub fn series(index: usize) -> Style {
        match index % 3 {
            0 => Self::danger(),
            1 => Self::info(),
            _ => Self::accent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_colors() {
        assert_eq!(MedicalTheme::trend(Trend::Up), MedicalTheme::success());
        assert_eq!(MedicalTheme::trend(Trend::Down), MedicalTheme::danger());
        assert_eq!(MedicalTheme::trend(Trend::Neutral), MedicalTheme::warning());
    }

    #[test]
    fn test_risk_level_colors() {
        assert_eq!(MedicalTheme::risk_level(RiskLevel::Low), MedicalTheme::success());
        assert_eq!(MedicalTheme::risk_level(RiskLevel::High), MedicalTheme::danger());
    }
}
