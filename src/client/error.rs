//! Error type for non-2xx responses from the analysis API.

use std::fmt;

use crate::error::AnalysisError;

/// API error built from a failed response; the message leads with the status.
#[derive(Debug)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Build an error from a response status and its (possibly empty) body.
    ///
    /// Long bodies (HTML error pages and the like) are cut to keep the
    /// message readable inside the viewer.
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        const MAX_BODY_CHARS: usize = 200;

        let reason = status.canonical_reason().unwrap_or("Unknown");
        let body = body.trim();
        let message = if body.is_empty() {
            format!("{} {}", status.as_u16(), reason)
        } else {
            let snippet: String = body.chars().take(MAX_BODY_CHARS).collect();
            format!("{} {}: {}", status.as_u16(), reason, snippet)
        };
        Self { message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ApiError> for AnalysisError {
    fn from(error: ApiError) -> Self {
        AnalysisError::Api(error.message)
    }
}
