use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Convert anyhow errors to AlpError
impl From<anyhow::Error> for AlpError {
    fn from(err: anyhow::Error) -> Self {
        AlpError::Unknown(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AlpError>;
