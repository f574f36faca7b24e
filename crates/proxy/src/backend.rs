//! HTTP client for the external inference backend.

use alp_common::{AlpError, BackendConfig, GenerateRequest, GenerateResponse, Result, StatsResponse};
use std::time::Duration;
use tracing::{debug, error};

const API_KEY_HEADER: &str = "X-API-Key";

/// Client for the inference backend the proxy forwards to.
pub struct BackendClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AlpError::Backend(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// Forward a prompt submission to the backend and relay its response.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}/generate", self.base_url);
        debug!(url = %url, model = %request.model, "Forwarding generate request");

        let mut builder = self.client.post(&url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AlpError::Backend(format!("Backend request failed: {}", e)))?;

        if !response.status().is_success() {
            error!(status = %response.status(), "Backend returned error status");
            return Err(AlpError::Backend(format!(
                "Backend returned status {}",
                response.status()
            )));
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| AlpError::Backend(format!("Invalid backend response: {}", e)))
    }

    /// Fetch serving statistics from the backend.
    pub async fn stats(&self) -> Result<StatsResponse> {
        let url = format!("{}/stats", self.base_url);
        debug!(url = %url, "Fetching backend stats");

        let mut builder = self.client.get(&url);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AlpError::Backend(format!("Backend request failed: {}", e)))?;

        if !response.status().is_success() {
            error!(status = %response.status(), "Backend returned error status");
            return Err(AlpError::Backend(format!(
                "Backend returned status {}",
                response.status()
            )));
        }

        response
            .json::<StatsResponse>()
            .await
            .map_err(|e| AlpError::Backend(format!("Invalid backend response: {}", e)))
    }
}
