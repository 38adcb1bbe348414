//! Standalone host screen for the analysis viewer
//!
//! When the viewer runs on its own (`ticket-analysis view`), closing it
//! should end the program. This screen sizes itself to the terminal, mounts
//! the viewer, and calls `system.exit()` once the viewer reports a close.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::client::{AnalysisClient, TicketId};
use crate::tui::analysis::AnalysisViewer;
use crate::tui::theme::theme;

/// Props for the AnalysisScreen component
#[derive(Default, Props)]
pub struct AnalysisScreenProps {
    pub ticket_id: Option<TicketId>,
    pub client: Option<Arc<dyn AnalysisClient>>,
}

#[component]
pub fn AnalysisScreen<'a>(
    props: &AnalysisScreenProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let should_exit = hooks.use_state(|| false);

    let on_close: Handler<()> = hooks.use_async_handler(move |()| {
        let mut should_exit = should_exit;
        async move {
            should_exit.set(true);
        }
    });

    if should_exit.get() {
        system.exit();
    }

    element! {
        View(
            width: width,
            height: height,
            background_color: theme().background,
            position: Position::Relative,
        ) {
            AnalysisViewer(
                ticket_id: props.ticket_id,
                client: props.client.clone(),
                on_close: Some(on_close),
            )
        }
    }
}
