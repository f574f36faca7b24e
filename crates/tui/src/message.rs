//! Application message types.
//!
//! All state changes happen through these messages, following the Elm
//! architecture: input events and completed side effects become messages,
//! the reducer in `application::update` folds them into the model.

use alp_common::{ComplexityLevel, GenerateResponse, ModelTier};

use crate::application::state::ComparisonResults;

/// Main application messages.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // ============== System Events ==============
    /// Application should quit
    Quit,
    /// Periodic timer tick
    Tick,
    /// Terminal was resized
    TerminalResized(u16, u16),

    // ============== Input & Analysis Events ==============
    /// Prompt text changed in the editor
    InputChanged(String),
    /// Debounce quiet period elapsed; recompute the complexity score
    DebounceElapsed,

    // ============== Submission Events ==============
    /// User asked to submit the current prompt
    PromptSubmitted,
    /// Submission accepted and dispatched to the proxy
    SubmissionStarted(String, ModelTier),
    /// Proxy returned a response
    SubmissionCompleted(GenerateResponse),
    /// Submission failed
    SubmissionFailed(String),

    // ============== Comparison Events ==============
    /// User toggled comparison mode
    ComparisonToggled,
    /// Comparison run dispatched for all tiers
    ComparisonStarted(String),
    /// Comparison finished with per-tier results (failed tiers are None)
    ComparisonCompleted(Box<ComparisonResults>),
    /// Every tier failed
    ComparisonFailed(String),

    // ============== UI Navigation Events ==============
    /// Move focus to next pane
    FocusNext,
    /// Move focus to previous pane
    FocusPrevious,
    /// Scroll the response pane up
    ResponseScrollUp,
    /// Scroll the response pane down
    ResponseScrollDown,
    /// Toggle help overlay
    HelpToggle,

    // ============== Error Events ==============
    /// General error occurred
    ErrorOccurred(String),
    /// Display status message
    StatusMessage(StatusSeverity, String),
}

/// Identifiers for the focusable dashboard panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneId {
    /// Prompt editor
    Input,
    /// Response viewer
    Response,
    /// Performance dashboard
    Dashboard,
}

impl PaneId {
    pub fn next(self) -> Self {
        match self {
            PaneId::Input => PaneId::Response,
            PaneId::Response => PaneId::Dashboard,
            PaneId::Dashboard => PaneId::Input,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            PaneId::Input => PaneId::Dashboard,
            PaneId::Response => PaneId::Input,
            PaneId::Dashboard => PaneId::Response,
        }
    }
}

/// Status message severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Info,
    Warning,
    Error,
}

impl StatusSeverity {
    /// Get the color for this severity
    pub fn color(&self) -> ratatui::style::Color {
        match self {
            StatusSeverity::Info => ratatui::style::Color::Blue,
            StatusSeverity::Warning => ratatui::style::Color::Yellow,
            StatusSeverity::Error => ratatui::style::Color::Red,
        }
    }

    /// Get the symbol for this severity
    pub fn symbol(&self) -> &'static str {
        match self {
            StatusSeverity::Info => "ℹ",
            StatusSeverity::Warning => "⚠",
            StatusSeverity::Error => "✗",
        }
    }
}

/// Display color for a complexity classification.
pub fn level_color(level: ComplexityLevel) -> ratatui::style::Color {
    match level {
        ComplexityLevel::Low => ratatui::style::Color::Green,
        ComplexityLevel::Medium => ratatui::style::Color::Yellow,
        ComplexityLevel::High => ratatui::style::Color::Red,
    }
}
