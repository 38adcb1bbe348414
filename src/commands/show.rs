use std::io::IsTerminal;

use serde_json::{Value, json};

use crate::client::{AnalysisClient, HttpAnalysisClient, TicketId};
use crate::config::Config;
use crate::display::format_view_model;
use crate::error::{AnalysisError, Result};
use crate::tui::analysis::model::{TITLE, ViewState, compute_view_model};
use crate::tui::analysis::{FetchController, run_fetch_cycle};

/// Fetch and print the analysis of a ticket without the TUI
pub async fn cmd_show(ticket_id: TicketId, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let client = HttpAnalysisClient::from_config(&config)?;
    let state = fetch_once(&client, ticket_id).await;

    let colored = std::io::stdout().is_terminal();
    let output = format_show(&state, ticket_id, output_json, colored)?;
    if !output.is_empty() {
        println!("{output}");
    }

    match state {
        ViewState::Error(message) => Err(AnalysisError::AnalysisFailed(message)),
        _ => Ok(()),
    }
}

/// Run a single fetch cycle and return the settled state
pub async fn fetch_once<C>(client: &C, ticket_id: TicketId) -> ViewState
where
    C: AnalysisClient + ?Sized,
{
    let mut controller = FetchController::new();
    run_fetch_cycle(&mut controller, client, ticket_id).await;
    controller.state().clone()
}

/// Text printed by `show` for a settled state.
///
/// In text mode an error state prints nothing; the error itself is reported
/// on stderr by the caller.
pub fn format_show(
    state: &ViewState,
    ticket_id: TicketId,
    output_json: bool,
    colored: bool,
) -> Result<String> {
    if output_json {
        return Ok(serde_json::to_string_pretty(&show_json(state, ticket_id))?);
    }

    if state.is_error() {
        return Ok(String::new());
    }

    let title = format!("{TITLE}  #{ticket_id}");
    Ok(format_view_model(&compute_view_model(state), &title, colored))
}

/// JSON document describing a settled state
pub fn show_json(state: &ViewState, ticket_id: TicketId) -> Value {
    match state {
        ViewState::Loading => json!({ "ticket_id": ticket_id, "state": "loading" }),
        ViewState::Error(message) => {
            json!({ "ticket_id": ticket_id, "state": "error", "message": message })
        }
        ViewState::Empty => json!({ "ticket_id": ticket_id, "state": "empty" }),
        ViewState::Success(result) => {
            json!({ "ticket_id": ticket_id, "state": "success", "analysis": result })
        }
    }
}
