//! HTTP implementation of [`AnalysisClient`].
//!
//! # Security Note - Logging
//!
//! The API token is held in a [`SecretString`] and only exposed when the
//! `Authorization` header is built. Avoid `RUST_LOG=reqwest=debug` in
//! production, it logs request details.

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::analysis::AnalysisEnvelope;
use crate::config::Config;
use crate::error::{AnalysisError, Result};

use super::{AnalysisClient, ApiError, TicketId};

/// Talks to `POST {api_url}/tickets/{id}/analyze`
pub struct HttpAnalysisClient {
    client: Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl HttpAnalysisClient {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| AnalysisError::Config(format!("invalid API URL '{base_url}': {e}")))?;

        // Url::join replaces the last path segment unless the base ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            token: token.map(SecretString::from),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api_url(),
            config.api_token(),
            config.request_timeout(),
        )
    }

    /// Analysis endpoint for one ticket
    pub fn endpoint(&self, ticket_id: TicketId) -> Result<Url> {
        self.base_url
            .join(&format!("tickets/{ticket_id}/analyze"))
            .map_err(|e| AnalysisError::Other(format!("failed to build analysis URL: {e}")))
    }
}

#[async_trait::async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze_ticket(&self, ticket_id: TicketId) -> Result<AnalysisEnvelope> {
        let url = self.endpoint(ticket_id)?;
        debug!(%url, %ticket_id, "requesting ticket analysis");

        let mut request = self.client.post(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        // Error responses may still carry an envelope with a useful inner message
        if let Ok(envelope) = serde_json::from_str::<AnalysisEnvelope>(&body) {
            debug!(%status, "error response carried an analysis envelope");
            return Ok(envelope);
        }

        Err(ApiError::from_response(status, &body).into())
    }
}
