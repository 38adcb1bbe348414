//! Clickable wrappers for mouse interaction
//!
//! Events are delivered only when they occur within component bounds, via
//! iocraft's `use_local_terminal_events` hit-testing.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Clickable component
#[derive(Default, Props)]
pub struct ClickableProps<'a> {
    /// Child element to wrap
    pub children: Vec<AnyElement<'a>>,
    /// Handler invoked when component is clicked
    pub on_click: Option<Handler<()>>,
}

/// Generic clickable wrapper component with automatic hit-testing
///
/// ```ignore
/// let click_handler = hooks.use_async_handler(move |()| async move {
///     // Handle click
/// });
///
/// element! {
///     Clickable(on_click: Some(click_handler)) {
///         Text(content: "Click me")
///     }
/// }
/// ```
#[component]
pub fn Clickable<'a>(
    props: &mut ClickableProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let on_click = props.on_click.clone();

    hooks.use_local_terminal_events({
        move |event| {
            if let TerminalEvent::FullscreenMouse(mouse_event) = event
                && let MouseEventKind::Down(_) = mouse_event.kind
                && let Some(ref handler) = on_click
            {
                handler(());
            }
        }
    });

    // Return the first child if any, otherwise an empty view
    match props.children.iter_mut().next() {
        Some(child) => child.into(),
        None => element!(View).into_any(),
    }
}

/// Props for the Button component
#[derive(Default, Props)]
pub struct ButtonProps {
    pub label: String,
    pub on_click: Option<Handler<()>>,
    /// Label color (default: theme text)
    pub color: Option<Color>,
}

/// Bordered, clickable label
#[component]
pub fn Button(props: &ButtonProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let color = props.color.unwrap_or(theme.text);

    element! {
        Clickable(on_click: props.on_click.clone()) {
            View(
                border_style: BorderStyle::Round,
                border_color: theme.border,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: props.label.clone(), color: color)
            }
        }
    }
}
