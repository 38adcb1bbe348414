//! Theme system for TUI colors and styles
//!
//! Also hosts the mapping from analysis levels and feelings to colors. These
//! are presentation metadata only and never feed back into fetch state.

use iocraft::prelude::Color;

use crate::analysis::{Feeling, Level, UrgencyLevel};

const fn hex(rgb: u32) -> Color {
    Color::Rgb {
        r: ((rgb >> 16) & 0xff) as u8,
        g: ((rgb >> 8) & 0xff) as u8,
        b: (rgb & 0xff) as u8,
    }
}

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Level colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // Sentiment colors
    pub sentiment_positive: Color,
    pub sentiment_neutral: Color,
    pub sentiment_negative: Color,
    pub sentiment_frustrated: Color,
    pub sentiment_urgent: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub title: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: hex(0x10b981),
            warning: hex(0xf59e0b),
            danger: hex(0xef4444),

            sentiment_positive: hex(0x10b981),
            sentiment_neutral: hex(0x6b7280),
            sentiment_negative: hex(0xef4444),
            sentiment_frustrated: hex(0xf59e0b),
            sentiment_urgent: hex(0xdc2626),

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            title: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a confidence or feasibility level
    pub fn confidence_color(&self, level: Level) -> Color {
        match level {
            Level::High => self.success,
            Level::Medium => self.warning,
            Level::Low => self.danger,
        }
    }

    /// Get the color for a sentiment feeling
    pub fn sentiment_color(&self, feeling: Feeling) -> Color {
        match feeling {
            Feeling::Positive => self.sentiment_positive,
            Feeling::Neutral => self.sentiment_neutral,
            Feeling::Negative => self.sentiment_negative,
            Feeling::Frustrated => self.sentiment_frustrated,
            Feeling::Urgent => self.sentiment_urgent,
        }
    }

    /// Get the color for an urgency level.
    ///
    /// Urgency shares the confidence buckets; `Critical` lands in the same
    /// bucket as `Level::Low` and has no color of its own.
    pub fn urgency_color(&self, urgency: UrgencyLevel) -> Color {
        let bucket = match urgency {
            UrgencyLevel::Low | UrgencyLevel::Critical => Level::Low,
            UrgencyLevel::Medium => Level::Medium,
            UrgencyLevel::High => Level::High,
        };
        self.confidence_color(bucket)
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}

/// [`Theme::confidence_color`] on the global theme
pub fn confidence_color(level: Level) -> Color {
    theme().confidence_color(level)
}

/// [`Theme::sentiment_color`] on the global theme
pub fn sentiment_color(feeling: Feeling) -> Color {
    theme().sentiment_color(feeling)
}

/// [`Theme::urgency_color`] on the global theme
pub fn urgency_color(urgency: UrgencyLevel) -> Color {
    theme().urgency_color(urgency)
}
