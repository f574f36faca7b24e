use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured backend API key.
pub const API_KEY_ENV: &str = "ALP_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub proxy: ProxyConfig,
    pub backend: BackendConfig,
}

/// Listen address of the proxy itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

/// The external inference backend the proxy forwards to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, e.g. `http://localhost:8000`.
    pub url: String,

    /// Static API key forwarded as `X-API-Key`. Overridden by `ALP_API_KEY`
    /// when set.
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            proxy: ProxyConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            backend: BackendConfig {
                url: "http://localhost:8000".to_string(),
                api_key: None,
                timeout_secs: 120,
            },
        }
    }
}

impl SystemConfig {
    /// Load configuration from a TOML file, apply the environment override,
    /// and validate.
    pub fn load(path: &str) -> Result<Self> {
        let mut config = Self::from_file(path)?;

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.backend.api_key = Some(key);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML configuration file without validating it.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.backend.url)
            .with_context(|| format!("Invalid backend URL: {}", self.backend.url))?;

        if self.proxy.port == 0 {
            anyhow::bail!("Proxy port must be greater than 0");
        }

        if self.backend.timeout_secs == 0 {
            anyhow::bail!("Backend timeout_secs must be greater than 0");
        }

        Ok(())
    }

    /// The socket address string the proxy should bind.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.proxy.host, self.proxy.port)
    }
}
