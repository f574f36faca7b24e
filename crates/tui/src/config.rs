//! Configuration management for the ALP TUI client.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// ALP proxy URL
    pub server_url: String,

    /// HTTP request configuration
    pub request: RequestConfig,

    /// UI configuration
    pub ui: UiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Retry attempts for failed submissions
    pub max_retries: u32,

    /// Base delay for exponential backoff in milliseconds
    pub retry_base_delay_ms: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Quiet period after the last keystroke before the complexity score
    /// is recomputed, in milliseconds
    pub debounce_ms: u64,

    /// Periodic tick interval in milliseconds
    pub tick_interval_ms: u64,

    /// Seconds a status message stays visible before it is cleared
    pub status_ttl_secs: i64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,

    /// Enable file logging (the terminal itself belongs to the dashboard)
    pub log_to_file: bool,

    /// Log file path (if enabled)
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".to_string(),
            request: RequestConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 120,
            max_retries: 3,
            retry_base_delay_ms: 100,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            tick_interval_ms: 200,
            status_ttl_secs: 8,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: true,
            log_file: Some("alp-tui.log".to_string()),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(
        config_path: Option<&String>,
        server_url: Option<&String>,
        log_level: Option<&String>,
    ) -> Result<Self> {
        let mut config = if let Some(path) = config_path {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        // Override with command line arguments
        if let Some(url) = server_url {
            config.server_url = url.clone();
        }
        if let Some(level) = log_level {
            config.logging.level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.server_url)
            .with_context(|| format!("Invalid server URL: {}", self.server_url))?;

        if self.request.timeout_secs == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }

        if self.ui.debounce_ms == 0 {
            anyhow::bail!("Debounce interval must be greater than 0");
        }

        if self.ui.tick_interval_ms == 0 {
            anyhow::bail!("Tick interval must be greater than 0");
        }

        Ok(())
    }
}
