//! Fetch controller for the analysis viewer
//!
//! Each ticket activation starts a new fetch cycle tagged with an epoch. A
//! response is applied only if its epoch is still the current one, so a slow
//! response for a ticket the user has already moved away from can never
//! overwrite the newer ticket's state. Closing the viewer retires the
//! controller and every response still in flight with it.

use tracing::{debug, warn};

use crate::analysis::AnalysisFailure;
use crate::client::{AnalysisClient, TicketId};

use super::model::ViewState;

/// Handle carried by one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    epoch: u64,
    ticket: TicketId,
}

impl FetchToken {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn ticket(&self) -> TicketId {
        self.ticket
    }
}

/// Owns the view state for one viewer instance
#[derive(Debug, Clone)]
pub struct FetchController {
    epoch: u64,
    active: Option<TicketId>,
    state: ViewState,
    mounted: bool,
}

impl Default for FetchController {
    fn default() -> Self {
        Self {
            epoch: 0,
            active: None,
            state: ViewState::Loading,
            mounted: true,
        }
    }
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn active_ticket(&self) -> Option<TicketId> {
        self.active
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether `ticket` still needs a fetch cycle
    pub fn needs_fetch(&self, ticket: TicketId) -> bool {
        self.mounted && self.active != Some(ticket)
    }

    /// Start a new cycle for `ticket`, discarding whatever the previous cycle
    /// produced or still has in flight.
    pub fn activate(&mut self, ticket: TicketId) -> FetchToken {
        self.epoch += 1;
        self.active = Some(ticket);
        self.state = ViewState::Loading;
        debug!(%ticket, epoch = self.epoch, "analysis fetch cycle started");

        FetchToken {
            epoch: self.epoch,
            ticket,
        }
    }

    /// Apply the outcome of the request identified by `token`.
    ///
    /// Returns false when the outcome was discarded: the viewer was closed,
    /// a newer cycle has started, or this cycle already settled.
    pub fn apply(&mut self, token: FetchToken, state: ViewState) -> bool {
        if !self.mounted {
            debug!(ticket = %token.ticket, "viewer closed, dropping analysis result");
            return false;
        }

        if token.epoch != self.epoch {
            debug!(
                ticket = %token.ticket,
                stale_epoch = token.epoch,
                current_epoch = self.epoch,
                "dropping stale analysis result"
            );
            return false;
        }

        if !self.state.is_loading() {
            debug!(ticket = %token.ticket, "analysis cycle already settled");
            return false;
        }

        self.state = state;
        true
    }

    /// Retire the controller. Nothing is applied after this.
    ///
    /// Returns false if the controller was already retired; the epoch is
    /// left untouched in that case.
    pub fn unmount(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.mounted = false;
        self.epoch += 1;
        true
    }
}

/// Perform the single analysis request for `ticket` and settle it into a
/// view state. Never fails: every failure becomes `ViewState::Error`.
pub async fn fetch_view_state<C>(client: &C, ticket: TicketId) -> ViewState
where
    C: AnalysisClient + ?Sized,
{
    match client.analyze_ticket(ticket).await {
        Ok(envelope) => match envelope.resolve() {
            Ok(payload) => ViewState::settled(payload),
            Err(failure) => {
                debug!(%ticket, ?failure, "analysis reported failure");
                ViewState::from_failure(&failure)
            }
        },
        Err(e) => {
            warn!(%ticket, "Failed to analyze ticket: {e}");
            ViewState::from_failure(&AnalysisFailure::transport(e.to_string()))
        }
    }
}

/// Run one complete cycle against `controller`: activate, fetch, apply.
///
/// Returns the token used so callers can tell whether a later cycle
/// superseded this one.
pub async fn run_fetch_cycle<C>(
    controller: &mut FetchController,
    client: &C,
    ticket: TicketId,
) -> FetchToken
where
    C: AnalysisClient + ?Sized,
{
    let token = controller.activate(ticket);
    let state = fetch_view_state(client, ticket).await;
    controller.apply(token, state);
    token
}
