//! Plain-terminal rendering of the analysis view model
//!
//! Used by `show`, which prints the same sections the TUI viewer renders
//! without taking over the screen.

use iocraft::prelude::Color;
use owo_colors::OwoColorize;

use crate::tui::analysis::model::{AnalysisViewModel, LevelRow, ModalBody, Section};

/// Apply a theme color to `text`. Non-RGB colors are left unpainted.
fn paint(text: &str, color: Color, colored: bool) -> String {
    match color {
        Color::Rgb { r, g, b } if colored => text.truecolor(r, g, b).to_string(),
        _ => text.to_string(),
    }
}

fn heading(text: &str, colored: bool) -> String {
    if colored {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Format a view model as text, one section per paragraph
pub fn format_view_model(view_model: &AnalysisViewModel, title: &str, colored: bool) -> String {
    let mut lines = vec![heading(title, colored)];

    match &view_model.body {
        ModalBody::Loading { message } | ModalBody::Empty { message } => {
            lines.push(String::new());
            lines.push(message.to_string());
        }
        ModalBody::Error { message, color } => {
            lines.push(String::new());
            lines.push(paint(&format!("! {message}"), *color, colored));
        }
        ModalBody::Sections(sections) => {
            for section in sections {
                lines.push(String::new());
                lines.push(heading(section.title(), colored));
                format_section(section, colored, &mut lines);
            }
        }
    }

    lines.join("\n")
}

fn format_section(section: &Section, colored: bool, lines: &mut Vec<String>) {
    match section {
        Section::Summary { text } => {
            lines.extend(text.lines().map(|line| format!("  {line}")));
        }
        Section::Categories { rows } | Section::Automations { rows } => {
            for row in rows {
                format_level_row(row, colored, lines);
            }
        }
        Section::Sentiment(view) => {
            lines.push(format!(
                "  Overall Feeling: {}",
                paint(&view.feeling_label, view.feeling_color, colored)
            ));
            lines.push(format!(
                "  Urgency Level: {}",
                paint(&view.urgency_label, view.urgency_color, colored)
            ));
            if !view.indicators.is_empty() {
                lines.push("  Indicators:".to_string());
                lines.extend(view.indicators.iter().map(|i| format!("    {i}")));
            }
        }
    }
}

fn format_level_row(row: &LevelRow, colored: bool, lines: &mut Vec<String>) {
    let badge = paint(&format!("[{}]", row.badge), row.badge_color, colored);
    lines.push(format!("  {} {}", row.name, badge));
    if !row.detail.is_empty() {
        lines.push(format!("    {}", row.detail));
    }
}
