//! Element builders for the analysis modal body

use iocraft::prelude::*;

use crate::tui::components::Spinner;
use crate::tui::theme::theme;

use super::model::{LevelRow, ModalBody, Section, SentimentView};

/// Render the content area for a computed modal body
pub fn render_body(body: &ModalBody) -> AnyElement<'static> {
    match body {
        ModalBody::Loading { message } => render_centered(
            element! { Spinner(message: *message) }.into_any(),
        ),
        ModalBody::Error { message, color } => element! {
            View(
                width: 100pct,
                border_style: BorderStyle::Round,
                border_color: *color,
                padding_left: 1,
                padding_right: 1,
                flex_direction: FlexDirection::Row,
                column_gap: 1,
            ) {
                Text(content: "!", color: *color, weight: Weight::Bold)
                Text(content: message.clone(), color: *color)
            }
        }
        .into_any(),
        ModalBody::Empty { message } => {
            let theme = theme();
            render_centered(
                element! { Text(content: *message, color: theme.text_dimmed) }.into_any(),
            )
        }
        ModalBody::Sections(sections) => {
            let cards: Vec<AnyElement<'static>> = sections.iter().map(render_section).collect();
            element! {
                View(width: 100pct, flex_direction: FlexDirection::Column) {
                    #(cards)
                }
            }
            .into_any()
        }
    }
}

fn render_centered(child: AnyElement<'static>) -> AnyElement<'static> {
    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            #(Some(child))
        }
    }
    .into_any()
}

fn render_section(section: &Section) -> AnyElement<'static> {
    let theme = theme();
    let title = section.title();

    let content: Vec<AnyElement<'static>> = match section {
        Section::Summary { text } => vec![
            element! { Text(content: text.clone(), color: theme.text) }.into_any(),
        ],
        Section::Categories { rows } | Section::Automations { rows } => {
            rows.iter().map(render_level_row).collect()
        }
        Section::Sentiment(view) => render_sentiment(view),
    };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: title, color: theme.title, weight: Weight::Bold)
            #(content)
        }
    }
    .into_any()
}

fn render_level_row(row: &LevelRow) -> AnyElement<'static> {
    let theme = theme();
    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            View(flex_direction: FlexDirection::Row, column_gap: 1) {
                Text(content: row.name.clone(), color: theme.text, weight: Weight::Bold)
                Text(content: format!("[{}]", row.badge), color: row.badge_color)
            }
            Text(content: row.detail.clone(), color: theme.text_dimmed)
        }
    }
    .into_any()
}

fn render_sentiment(view: &SentimentView) -> Vec<AnyElement<'static>> {
    let theme = theme();
    let mut rows = vec![
        element! {
            View(flex_direction: FlexDirection::Row, column_gap: 1) {
                Text(content: "Overall Feeling:", color: theme.text_dimmed)
                Text(content: view.feeling_label.clone(), color: view.feeling_color, weight: Weight::Bold)
            }
        }
        .into_any(),
        element! {
            View(flex_direction: FlexDirection::Row, column_gap: 1) {
                Text(content: "Urgency Level:", color: theme.text_dimmed)
                Text(content: view.urgency_label.clone(), color: view.urgency_color, weight: Weight::Bold)
            }
        }
        .into_any(),
    ];

    if !view.indicators.is_empty() {
        rows.push(
            element! {
                View(flex_direction: FlexDirection::Column) {
                    Text(content: "Indicators:", color: theme.text_dimmed)
                    #(view.indicators.iter().map(|indicator| {
                        element! {
                            Text(content: format!("  {indicator}"), color: theme.text)
                        }
                    }))
                }
            }
            .into_any(),
        );
    }

    rows
}
