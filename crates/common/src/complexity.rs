//! Heuristic prompt-complexity scoring.
//!
//! Scores a prompt on four lexical factors, each contributing up to 25
//! points, and classifies the total into a coarse tier used for model
//! selection. The scorer is pure and total: any string, including the empty
//! one, produces a result.
//!
//! | Factor              | Saturates at |
//! |---------------------|--------------|
//! | text length         | 500 chars    |
//! | unique words        | 100 words    |
//! | average word length | 10 chars     |
//! | special characters  | 50 chars     |

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Weight of a single factor; four factors give a total score in [0, 100].
const FACTOR_WEIGHT: f64 = 25.0;

const LENGTH_SATURATION: f64 = 500.0;
const UNIQUE_WORDS_SATURATION: f64 = 100.0;
const AVG_WORD_LENGTH_SATURATION: f64 = 10.0;
const SPECIAL_CHARS_SATURATION: f64 = 50.0;

/// Score below which a prompt is classified as low complexity.
const MEDIUM_THRESHOLD: f64 = 33.0;
/// Score below which a prompt is classified as medium complexity.
const HIGH_THRESHOLD: f64 = 66.0;

/// Coarse complexity classification of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "Low",
            ComplexityLevel::Medium => "Medium",
            ComplexityLevel::High => "High",
        }
    }

    fn from_score(score: f64) -> Self {
        if score < MEDIUM_THRESHOLD {
            ComplexityLevel::Low
        } else if score < HIGH_THRESHOLD {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::High
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw factor measurements taken from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityFactors {
    /// Character count of the raw, untrimmed input.
    pub length: usize,

    /// Distinct case-insensitive whitespace-delimited tokens.
    pub unique_words: usize,

    /// Mean token length in characters; 0 when there are no tokens.
    pub average_word_length: f64,

    /// Characters outside ASCII alphanumerics and whitespace.
    pub special_characters: usize,
}

/// Per-factor sub-scores, each clamped to [0, 25].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub length: f64,
    pub unique_words: f64,
    pub average_word_length: f64,
    pub special_characters: f64,
}

impl SubScores {
    pub fn total(&self) -> f64 {
        self.length + self.unique_words + self.average_word_length + self.special_characters
    }
}

/// Result of scoring a single prompt. Immutable; recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityResult {
    /// Total score in [0, 100], sum of the four sub-scores.
    pub score: f64,

    /// Classification of `score` with boundaries at 33 and 66.
    pub level: ComplexityLevel,

    /// The raw factor measurements behind the score.
    pub factors: ComplexityFactors,
}

impl ComplexityResult {
    /// Recover the per-factor sub-score breakdown.
    pub fn sub_scores(&self) -> SubScores {
        self.factors.sub_scores()
    }
}

impl Default for ComplexityResult {
    fn default() -> Self {
        analyze("")
    }
}

impl ComplexityFactors {
    fn measure(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let unique_words = tokens
            .iter()
            .map(|t| t.to_lowercase())
            .collect::<HashSet<_>>()
            .len();

        let average_word_length = if tokens.is_empty() {
            0.0
        } else {
            let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
            total_chars as f64 / tokens.len() as f64
        };

        let special_characters = text
            .chars()
            .filter(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
            .count();

        Self {
            length: text.chars().count(),
            unique_words,
            average_word_length,
            special_characters,
        }
    }

    /// Scale each factor against its saturation point and weight it.
    pub fn sub_scores(&self) -> SubScores {
        SubScores {
            length: scaled(self.length as f64, LENGTH_SATURATION),
            unique_words: scaled(self.unique_words as f64, UNIQUE_WORDS_SATURATION),
            average_word_length: scaled(self.average_word_length, AVG_WORD_LENGTH_SATURATION),
            special_characters: scaled(self.special_characters as f64, SPECIAL_CHARS_SATURATION),
        }
    }
}

fn scaled(value: f64, saturation: f64) -> f64 {
    (value / saturation).min(1.0) * FACTOR_WEIGHT
}

/// Score a prompt.
///
/// Tokenization splits on whitespace runs; empty and whitespace-only input
/// yields zero tokens, so an empty prompt scores exactly 0. Special
/// characters are counted over the raw input, untrimmed.
pub fn analyze(text: &str) -> ComplexityResult {
    let factors = ComplexityFactors::measure(text);
    let score = factors.sub_scores().total();

    ComplexityResult {
        score,
        level: ComplexityLevel::from_score(score),
        factors,
    }
}
