//! ALP proxy API service layer.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use alp_common::{GenerateRequest, GenerateResponse, ModelTier, StatsResponse};

use crate::{
    config::Config,
    error::{ClientError, Error, Result},
};

/// Service for talking to the ALP proxy.
#[derive(Clone)]
pub struct ApiService {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    base_delay: Duration,
}

impl ApiService {
    /// Create new API service
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request.timeout_secs))
            .build()
            .map_err(ClientError::from)?;

        Ok(Self {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
            max_retries: config.request.max_retries.max(1),
            base_delay: Duration::from_millis(config.request.retry_base_delay_ms),
        })
    }

    /// Retry an async operation with exponential backoff
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F, operation_name: &str) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    let retryable = e.is_recoverable();
                    last_error = Some(e);

                    if !retryable {
                        break;
                    }

                    if attempt < self.max_retries {
                        let delay = self.base_delay * 2_u32.pow(attempt - 1);
                        warn!(
                            "{} failed (attempt {}/{}), retrying in {:?}: {}",
                            operation_name,
                            attempt,
                            self.max_retries,
                            delay,
                            last_error.as_ref().map(|e| e.to_string()).unwrap_or_default()
                        );
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.expect("retry loop ran at least once"))
    }

    /// Submit a prompt to the proxy for the given tier.
    pub async fn generate(&self, prompt: &str, tier: ModelTier) -> Result<GenerateResponse> {
        info!(prompt_len = prompt.len(), tier = %tier, "Submitting prompt");

        self.retry_with_backoff(
            || async {
                let request = GenerateRequest::new(prompt, tier);
                let url = format!("{}/generate", self.base_url);

                let response = self
                    .client
                    .post(&url)
                    .json(&request)
                    .send()
                    .await
                    .map_err(ClientError::from)?;

                let status = response.status();
                if !status.is_success() {
                    let body = response.text().await.ok();
                    error!(status = %status, "Proxy rejected submission");
                    return Err(Error::Client(ClientError::HttpError {
                        url,
                        status: status.as_u16(),
                        body,
                    }));
                }

                let parsed = response
                    .json::<GenerateResponse>()
                    .await
                    .map_err(ClientError::from)?;
                Ok(parsed)
            },
            "Prompt submission",
        )
        .await
    }

    /// Fetch serving statistics through the proxy.
    pub async fn stats(&self) -> Result<StatsResponse> {
        debug!("Fetching stats");

        let url = format!("{}/stats", self.base_url);
        let response = self.client.get(&url).send().await.map_err(ClientError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Client(ClientError::HttpError {
                url,
                status: status.as_u16(),
                body: None,
            }));
        }

        let parsed = response
            .json::<StatsResponse>()
            .await
            .map_err(ClientError::from)?;
        Ok(parsed)
    }

    /// Probe the proxy's health endpoint; returns its status string.
    pub async fn health(&self) -> Result<String> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await.map_err(ClientError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Client(ClientError::HttpError {
                url,
                status: status.as_u16(),
                body: None,
            }));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(ClientError::from)?;
        Ok(body["status"].as_str().unwrap_or("unknown").to_string())
    }
}
