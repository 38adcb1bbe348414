//! AI analysis viewer
//!
//! Modal overlay that fetches the analysis for one ticket and shows it. The
//! state machine lives in [`controller`], the rendering rules in [`model`];
//! this module wires both into an iocraft component.

// Allow clone on Copy types - used intentionally in async closures for clarity
#![allow(clippy::clone_on_copy)]

pub mod controller;
pub mod model;
mod sections;

use std::sync::Arc;

use iocraft::prelude::*;

use crate::client::{AnalysisClient, TicketId};
use crate::tui::components::{ModalBorderColor, ModalContainer, ModalOverlay};

pub use controller::{FetchController, FetchToken, fetch_view_state, run_fetch_cycle};
pub use model::{
    AnalysisViewModel, ClickRoute, ModalBody, ModalLayout, Section, SectionKind, ViewState,
    compute_view_model, route_click,
};

use model::{MODAL_HEIGHT_PCT, MODAL_WIDTH_PCT, is_close_key};
use sections::render_body;

const NO_CLIENT_MESSAGE: &str = "No analysis client configured";

/// Props for the AnalysisViewer component
#[derive(Default, Props)]
pub struct AnalysisViewerProps {
    /// Ticket to analyze. Changing it starts a new fetch cycle.
    pub ticket_id: Option<TicketId>,
    /// Backend the analysis is requested from
    pub client: Option<Arc<dyn AnalysisClient>>,
    /// Invoked when the user dismisses the viewer
    pub on_close: Option<Handler<()>>,
}

/// Analysis viewer component
///
/// Dismissable from the header `✕`, the footer `Close` button, a click on the
/// backdrop, or `Esc`/`q`. Clicks inside the modal never dismiss it.
#[component]
pub fn AnalysisViewer<'a>(
    props: &AnalysisViewerProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut controller: State<FetchController> = hooks.use_state(FetchController::new);

    // One request per cycle; the token decides whether its result still counts
    let fetch_handler: Handler<FetchToken> = hooks.use_async_handler({
        let client = props.client.clone();
        move |token: FetchToken| {
            let client = client.clone();
            let mut controller = controller;

            async move {
                let state = match client {
                    Some(client) => fetch_view_state(client.as_ref(), token.ticket()).await,
                    None => ViewState::Error(NO_CLIENT_MESSAGE.to_string()),
                };
                controller.write().apply(token, state);
            }
        }
    });

    let close_handler: Handler<()> = hooks.use_async_handler({
        let on_close = props.on_close.clone();
        move |()| {
            let on_close = on_close.clone();
            let mut controller = controller;

            async move {
                // Esc followed by a backdrop click must not close twice
                let first_close = controller.write().unmount();
                if first_close && let Some(on_close) = on_close {
                    on_close(());
                }
            }
        }
    });

    // Start a cycle whenever the ticket changes
    if let Some(ticket) = props.ticket_id {
        let needs_fetch = controller.read().needs_fetch(ticket);
        if needs_fetch {
            let token = controller.write().activate(ticket);
            fetch_handler.clone()(token);
        }
    }

    let layout = ModalLayout::centered(width, height, MODAL_WIDTH_PCT, MODAL_HEIGHT_PCT);
    hooks.use_terminal_events({
        let close_handler = close_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. })
                if kind != KeyEventKind::Release && is_close_key(code) =>
            {
                close_handler(());
            }
            TerminalEvent::FullscreenMouse(mouse_event) => {
                if let MouseEventKind::Down(_) = mouse_event.kind
                    && route_click(mouse_event.column, mouse_event.row, &layout)
                        == ClickRoute::Backdrop
                {
                    close_handler(());
                }
            }
            _ => {}
        }
    });

    let view_model = compute_view_model(controller.read().state());
    let title = match props.ticket_id {
        Some(ticket) => format!("{}  #{}", view_model.title, ticket),
        None => view_model.title.to_string(),
    };
    let border_color = match view_model.body {
        ModalBody::Error { .. } => ModalBorderColor::Error,
        _ => ModalBorderColor::Focused,
    };
    let body = render_body(&view_model.body);

    element! {
        ModalOverlay {
            ModalContainer(
                width_pct: Some(MODAL_WIDTH_PCT),
                height_pct: Some(MODAL_HEIGHT_PCT),
                border_color: Some(border_color),
                title: Some(title),
                footer_text: Some("Esc to close".to_string()),
                on_close: Some(close_handler),
            ) {
                #(Some(body))
            }
        }
    }
}
