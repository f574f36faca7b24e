use crate::complexity::ComplexityLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantization tier of the model serving a prompt.
///
/// The wire names (`full`, `8bit`, `4bit`) are part of the backend contract
/// and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelTier {
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "8bit")]
    EightBit,
    #[serde(rename = "4bit")]
    FourBit,
}

impl ModelTier {
    /// Wire name used in requests and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Full => "full",
            ModelTier::EightBit => "8bit",
            ModelTier::FourBit => "4bit",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ModelTier::Full => "Full Model",
            ModelTier::EightBit => "8-bit Model",
            ModelTier::FourBit => "4-bit Model",
        }
    }

    /// All tiers, in descending precision order.
    pub fn all() -> [ModelTier; 3] {
        [ModelTier::Full, ModelTier::EightBit, ModelTier::FourBit]
    }

    /// Map a complexity classification to the tier that should serve it.
    ///
    /// Harder prompts go to the unquantized model; simple ones can live with
    /// aggressive quantization.
    pub fn for_level(level: ComplexityLevel) -> Self {
        match level {
            ComplexityLevel::Low => ModelTier::FourBit,
            ComplexityLevel::Medium => ModelTier::EightBit,
            ComplexityLevel::High => ModelTier::Full,
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ModelTier {
    fn default() -> Self {
        ModelTier::Full
    }
}

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The user's prompt text.
    pub prompt: String,

    /// Tier to serve the prompt with.
    #[serde(default)]
    pub model: ModelTier,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>, model: ModelTier) -> Self {
        Self {
            prompt: prompt.into(),
            model,
        }
    }
}

/// Response body for `POST /generate`, relayed verbatim from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated completion text.
    pub response: String,

    /// Wire name of the tier that actually served the prompt.
    pub model: String,

    /// Per-request performance metrics reported by the backend.
    pub metrics: GenerationMetrics,
}

/// Backend-reported metrics for a single generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetrics {
    /// Generation latency in milliseconds.
    pub latency: f64,

    /// Resident memory at generation time, in percent.
    pub memory_usage: f64,

    /// Complexity label the backend attributed to the task.
    pub task_complexity: String,

    /// How many requests each tier has served so far.
    pub model_usage: ModelUsage,

    /// Memory saved by quantization relative to the full model, in GB.
    pub memory_savings: f64,
}

/// Request counts per tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ModelUsage {
    pub full: u64,
    #[serde(rename = "8bit")]
    pub eight_bit: u64,
    #[serde(rename = "4bit")]
    pub four_bit: u64,
}

impl ModelUsage {
    pub fn total(&self) -> u64 {
        self.full + self.eight_bit + self.four_bit
    }

    /// Count for a specific tier.
    pub fn for_tier(&self, tier: ModelTier) -> u64 {
        match tier {
            ModelTier::Full => self.full,
            ModelTier::EightBit => self.eight_bit,
            ModelTier::FourBit => self.four_bit,
        }
    }
}

/// Response body for `GET /stats`, relayed verbatim from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Wire names of the tiers currently resident in memory.
    pub loaded_models: Vec<String>,

    /// Current memory usage in percent.
    pub memory_usage: f64,

    /// Requests served since backend start.
    pub total_requests: u64,

    /// Cumulative memory saved by quantized serving, in GB.
    pub total_memory_saved: f64,

    /// Request counts per tier.
    pub model_usage: ModelUsage,
}
