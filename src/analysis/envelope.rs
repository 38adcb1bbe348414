//! Two-level status envelope returned by the analysis endpoint.
//!
//! The wire shape nests an analysis-level status inside a transport-level
//! status. [`AnalysisEnvelope::resolve`] collapses it into a plain `Result`
//! so both failure layers have to be handled by the caller.

use serde::{Deserialize, Serialize};

use super::AnalysisResult;

/// Status value both layers use to signal success
pub const SUCCESS_STATUS: &str = "success";

/// Message shown when a failure carries no usable message of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze ticket";

/// Outer, transport-level envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisEnvelope {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<InnerAnalysis>,
}

/// Inner, analysis-level envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerAnalysis {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Present only when `status` is "success"; may be null even then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
}

/// Why an analysis request did not produce a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// The request itself failed (network, timeout, undecodable body)
    Transport { message: Option<String> },
    /// Outer envelope status was not "success"
    Envelope { message: Option<String> },
    /// Outer envelope succeeded but the analysis status was not "success"
    Analysis { message: Option<String> },
}

impl AnalysisFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        AnalysisFailure::Transport {
            message: non_blank(Some(message.into())),
        }
    }

    /// Message to show the user. Every layer falls back to the same generic
    /// text when it has nothing better.
    pub fn user_message(&self) -> String {
        let message = match self {
            AnalysisFailure::Transport { message }
            | AnalysisFailure::Envelope { message }
            | AnalysisFailure::Analysis { message } => message.as_deref(),
        };
        message.unwrap_or(GENERIC_FAILURE_MESSAGE).to_string()
    }
}

fn non_blank(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

impl AnalysisEnvelope {
    /// Build a fully successful envelope around `result`
    pub fn success(result: AnalysisResult) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            analysis: Some(InnerAnalysis {
                status: SUCCESS_STATUS.to_string(),
                message: None,
                analysis: Some(result),
            }),
        }
    }

    /// Build an envelope whose inner analysis failed with `message`
    pub fn analysis_failed(message: Option<&str>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            analysis: Some(InnerAnalysis {
                status: "error".to_string(),
                message: message.map(str::to_string),
                analysis: None,
            }),
        }
    }

    /// Collapse both status layers.
    ///
    /// `Ok(None)` means both layers reported success but no payload came back.
    pub fn resolve(self) -> Result<Option<AnalysisResult>, AnalysisFailure> {
        let inner_message = non_blank(self.analysis.as_ref().and_then(|a| a.message.clone()));

        if self.status != SUCCESS_STATUS {
            return Err(AnalysisFailure::Envelope {
                message: inner_message,
            });
        }

        match self.analysis {
            Some(inner) if inner.status == SUCCESS_STATUS => Ok(inner.analysis),
            _ => Err(AnalysisFailure::Analysis {
                message: inner_message,
            }),
        }
    }
}
