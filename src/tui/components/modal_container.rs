//! Modal container component
//!
//! Provides a standardized modal box structure with header, content area, and footer.

use iocraft::prelude::*;

use super::clickable::{Button, Clickable};
use crate::tui::theme::theme;

/// Border colors the modal switches between
#[derive(Clone, Copy, Default)]
pub enum ModalBorderColor {
    #[default]
    Focused, // theme.border_focused (blue)
    Error,   // theme.danger
}

impl ModalBorderColor {
    pub fn to_color(&self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Error => theme().danger,
        }
    }
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    // Dimensions, as a percentage of the enclosing view (default: 100)
    pub width_pct: Option<u32>,
    pub height_pct: Option<u32>,

    // Styling
    pub border_color: Option<ModalBorderColor>,

    // Header
    pub title: Option<String>,

    // Footer
    pub footer_text: Option<String>,

    /// When set, the header gets a `✕` control and the footer a `Close`
    /// button, both invoking this handler
    pub on_close: Option<Handler<()>>,

    // Children
    pub children: Vec<AnyElement<'a>>,
}

/// Modal container component
///
/// Provides a standardized modal box structure with:
/// - Header with title and close control
/// - Flexible content area
/// - Footer with hint text and close button
///
/// ```ignore
/// element! {
///     ModalOverlay {
///         ModalContainer(
///             title: Some("AI Analysis".to_string()),
///             footer_text: Some("Esc to close".to_string()),
///             on_close: Some(close_handler),
///         ) {
///             Text(content: "...")
///         }
///     }
/// }
/// ```
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let border_color = props.border_color.unwrap_or_default().to_color();
    let width = props.width_pct.unwrap_or(100).min(100);
    let height = props.height_pct.unwrap_or(100).min(100);

    let title = props.title.clone().unwrap_or_default();
    let footer = props.footer_text.clone().unwrap_or_default();
    let on_close = props.on_close.clone();
    let closable = on_close.is_some();
    let has_footer = closable || props.footer_text.is_some();

    element! {
        View(
            width: Size::Percent(width as f32),
            height: Size::Percent(height as f32),
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            // Header
            View(
                width: 100pct,
                padding_bottom: 1,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
            ) {
                Text(
                    content: title,
                    color: theme.title,
                    weight: Weight::Bold,
                )
                View(flex_grow: 1.0)
                #(if closable {
                    Some(element! {
                        Clickable(on_click: on_close.clone()) {
                            Text(content: "✕", color: theme.text, weight: Weight::Bold)
                        }
                    })
                } else {
                    None
                })
            }

            // Content area
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            // Footer
            #(if has_footer {
                Some(element! {
                    View(
                        width: 100pct,
                        padding_top: 1,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        flex_shrink: 0.0,
                    ) {
                        Text(content: footer, color: theme.text_dimmed)
                        View(flex_grow: 1.0)
                        #(if closable {
                            Some(element! {
                                Button(label: "Close", on_click: on_close.clone())
                            })
                        } else {
                            None
                        })
                    }
                })
            } else {
                None
            })
        }
    }
}
