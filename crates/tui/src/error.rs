//! Error handling for the ALP TUI application.

use thiserror::Error;

/// Result type alias using the application's error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ALP TUI application
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network and API client errors
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// UI and terminal errors
    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue { field: String, value: String },

    /// Configuration file parsing error
    #[error("Failed to parse configuration file '{path}'")]
    ParseError {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {message}")]
    ValidationError { message: String },
}

/// Client and API-specific errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Proxy connection failure
    #[error("Failed to connect to ALP proxy at '{url}'")]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {url} -> {status}")]
    HttpError {
        url: String,
        status: u16,
        body: Option<String>,
    },

    /// API response parsing error
    #[error("Failed to parse API response from '{endpoint}'")]
    ParseError {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// UI and terminal-specific errors
#[derive(Error, Debug)]
pub enum UiError {
    /// Terminal setup error
    #[error("Failed to initialize terminal")]
    TerminalInit {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Event handling error
    #[error("Failed to handle UI event: {event}")]
    EventError { event: String },
}

impl Error {
    /// Check if this error is recoverable (e.g. transient network issues)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Client(ClientError::ConnectionFailed { .. })
                | Error::Client(ClientError::HttpError { status: 502..=504, .. })
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Error::Client(ClientError::ConnectionFailed { url, .. }) => {
                format!("Unable to connect to the ALP proxy at {}", url)
            }
            Error::Client(ClientError::HttpError { status, .. }) => {
                format!("The proxy rejected the request (status {})", status)
            }
            Error::Client(ClientError::ParseError { .. }) => {
                "Received an unreadable response from the proxy".to_string()
            }
            Error::Config(ConfigError::InvalidValue { field, .. }) => {
                format!("Invalid configuration for {}", field)
            }
            _ => "An unexpected error occurred".to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ClientError::ConnectionFailed {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
                source: Box::new(err),
            }
        } else if err.is_status() {
            ClientError::HttpError {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
                status: err.status().map(|s| s.as_u16()).unwrap_or(0),
                body: None,
            }
        } else {
            ClientError::ParseError {
                endpoint: err.url().map(|u| u.to_string()).unwrap_or_default(),
                source: Box::new(err),
            }
        }
    }
}

impl From<url::ParseError> for ConfigError {
    fn from(err: url::ParseError) -> Self {
        ConfigError::InvalidValue {
            field: "url".to_string(),
            value: err.to_string(),
        }
    }
}
