//! Outbound seam to the analysis backend.
//!
//! The viewer only depends on [`AnalysisClient`]; the HTTP implementation
//! lives in [`http`] and tests substitute their own.

pub mod error;
pub mod http;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisEnvelope;
use crate::error::{AnalysisError, Result};

pub use error::ApiError;
pub use http::HttpAnalysisClient;

/// Numeric identifier of a support ticket, as the backend expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub u64);

impl TicketId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(TicketId)
            .map_err(|_| AnalysisError::InvalidTicketId(s.to_string()))
    }
}

impl From<u64> for TicketId {
    fn from(id: u64) -> Self {
        TicketId(id)
    }
}

/// Performs the single `analyzeTicket` call for a ticket.
///
/// An `Err` is a transport-level failure: the request could not be made or
/// its body could not be decoded. Failures reported by the backend itself come
/// back as an `Ok` envelope with a non-success status.
#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze_ticket(&self, ticket_id: TicketId) -> Result<AnalysisEnvelope>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_id_parse() {
        assert_eq!("42".parse::<TicketId>().unwrap(), TicketId(42));
        assert_eq!(" 7 ".parse::<TicketId>().unwrap(), TicketId(7));
    }

    #[test]
    fn test_ticket_id_rejects_non_numeric() {
        let err = "TCK-1".parse::<TicketId>().unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidTicketId(ref s) if s == "TCK-1"));
        assert!("-3".parse::<TicketId>().is_err());
    }

    #[test]
    fn test_ticket_id_display() {
        assert_eq!(TicketId(1234).to_string(), "1234");
    }
}
