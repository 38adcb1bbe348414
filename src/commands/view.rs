use std::sync::Arc;

use iocraft::prelude::*;

use crate::client::{AnalysisClient, HttpAnalysisClient, TicketId};
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::tui::AnalysisScreen;

/// Launch the fullscreen analysis viewer for a ticket
pub async fn cmd_view(ticket_id: TicketId) -> Result<()> {
    let config = Config::load()?;
    let client: Arc<dyn AnalysisClient> = Arc::new(HttpAnalysisClient::from_config(&config)?);

    element!(AnalysisScreen(ticket_id: Some(ticket_id), client: Some(client)))
        .fullscreen()
        .await
        .map_err(|e| AnalysisError::Tui(e.to_string()))
}
