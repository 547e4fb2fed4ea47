//! HTTP client for the conversion API

use crate::constants::*;
use crate::error::ConvertError;
use crate::types::*;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct ConvertClient {
    client: reqwest::Client,
    base_url: String,
}

impl ConvertClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one conversion request. No timeout or retry: the call settles
    /// when the network layer does.
    pub async fn convert(&self, request: &ConvertRequest) -> Result<String, ConvertError> {
        let url = format!("{}{}", self.base_url, CONVERT_PATH);
        debug!(url = %url, option = %request.target, chars = request.text.chars().count(), "Sending convert request");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Convert request failed");
            return Err(ConvertError::from_error_body(&body));
        }

        let body = response.text().await?;
        let parsed: ConvertResponse = serde_json::from_str(&body)
            .map_err(|e| ConvertError::MalformedResponse(e.to_string()))?;
        debug!(chars = parsed.converted_text.chars().count(), "Convert request succeeded");
        Ok(parsed.converted_text)
    }

    /// Probe `GET /health`
    pub async fn health(&self) -> Result<(), ConvertError> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::Server(format!("HTTP {}", status)));
        }
        let health: HealthResponse = response.json().await?;
        if health.status == "ok" {
            Ok(())
        } else {
            Err(ConvertError::Server(format!("status {}", health.status)))
        }
    }
}
