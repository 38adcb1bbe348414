//! Indeterminate progress indicator

use std::time::Duration;

use iocraft::prelude::*;

use crate::tui::theme::theme;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Frame shown at animation step `tick`
pub fn spinner_frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}

/// Props for the Spinner component
#[derive(Default, Props)]
pub struct SpinnerProps {
    /// Text shown next to the spinner
    pub message: String,
}

/// Animated spinner followed by a message
#[component]
pub fn Spinner(props: &SpinnerProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let mut tick = hooks.use_state(|| 0usize);

    hooks.use_future(async move {
        loop {
            tokio::time::sleep(FRAME_INTERVAL).await;
            tick.set(tick.get().wrapping_add(1));
        }
    });

    element! {
        View(flex_direction: FlexDirection::Row, column_gap: 1) {
            Text(content: spinner_frame(tick.get()), color: theme.title)
            Text(content: props.message.clone(), color: theme.text_dimmed)
        }
    }
}
