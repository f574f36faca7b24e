//! Application state (Model in Elm architecture)

use alp_common::{
    analyze, ComplexityResult, CumulativeMetrics, GenerateResponse, ModelTier,
};
use chrono::{DateTime, Utc};

use crate::message::{PaneId, StatusSeverity};

/// A transient message shown in the status line.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub severity: StatusSeverity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Per-tier results of a comparison run. A `None` slot means that tier's
/// request failed.
#[derive(Debug, Clone, Default)]
pub struct ComparisonResults {
    pub full: Option<GenerateResponse>,
    pub eight_bit: Option<GenerateResponse>,
    pub four_bit: Option<GenerateResponse>,
}

impl ComparisonResults {
    pub fn get(&self, tier: ModelTier) -> Option<&GenerateResponse> {
        match tier {
            ModelTier::Full => self.full.as_ref(),
            ModelTier::EightBit => self.eight_bit.as_ref(),
            ModelTier::FourBit => self.four_bit.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_none() && self.eight_bit.is_none() && self.four_bit.is_none()
    }

    /// How many tiers have no result.
    pub fn failed_count(&self) -> usize {
        ModelTier::all()
            .iter()
            .filter(|tier| self.get(**tier).is_none())
            .count()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Core application state following Elm's Model pattern
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Current prompt text
    pub input: String,

    /// Latest complexity analysis of `input`
    pub complexity: ComplexityResult,

    /// A debounced recomputation is pending
    pub analysis_pending: bool,

    /// Last response returned by the proxy
    pub last_response: Option<GenerateResponse>,

    /// A single submission is in flight
    pub is_loading: bool,

    /// Comparison mode is active
    pub comparison_mode: bool,

    /// A comparison run is in flight
    pub comparison_loading: bool,

    /// Results of the last comparison run
    pub comparison: ComparisonResults,

    /// Session-level running latency average
    pub cumulative: CumulativeMetrics,

    /// Currently focused pane
    pub focused_pane: PaneId,

    /// Whether help overlay is visible
    pub show_help: bool,

    /// Current status message to display
    pub status_message: Option<StatusMessage>,

    /// When the last submission was dispatched
    pub last_submission_time: Option<DateTime<Utc>>,

    /// Scroll offset in the response pane
    pub response_scroll: u16,
}

impl AppModel {
    /// Create a new application model
    pub fn new() -> Self {
        Self {
            input: String::new(),
            complexity: analyze(""),
            analysis_pending: false,
            last_response: None,
            is_loading: false,
            comparison_mode: false,
            comparison_loading: false,
            comparison: ComparisonResults::default(),
            cumulative: CumulativeMetrics::new(),
            focused_pane: PaneId::Input,
            show_help: false,
            status_message: None,
            last_submission_time: None,
            response_scroll: 0,
        }
    }

    /// The tier the current complexity classification selects.
    pub fn selected_tier(&self) -> ModelTier {
        ModelTier::for_level(self.complexity.level)
    }

    /// Whether a submission can currently be dispatched.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.comparison_mode && !self.input.trim().is_empty()
    }

    /// Set status message
    pub fn set_status_message(&mut self, severity: StatusSeverity, message: String) {
        self.status_message = Some(StatusMessage {
            severity,
            message,
            timestamp: Utc::now(),
        });
    }

    /// Clear status message
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Drop the status message once it has outlived `ttl_secs`.
    pub fn expire_status_message(&mut self, ttl_secs: i64) {
        if let Some(status) = &self.status_message {
            if (Utc::now() - status.timestamp).num_seconds() >= ttl_secs {
                self.status_message = None;
            }
        }
    }

    /// Fold a response's latency into the session running average.
    pub fn record_latency(&mut self, latency: f64) {
        self.cumulative.record(latency);
    }

    /// Focus next pane in tab order
    pub fn focus_next_pane(&mut self) {
        self.focused_pane = self.focused_pane.next();
    }

    /// Focus previous pane in tab order
    pub fn focus_previous_pane(&mut self) {
        self.focused_pane = self.focused_pane.previous();
    }

    /// Scroll response pane up
    pub fn scroll_response_up(&mut self) {
        self.response_scroll = self.response_scroll.saturating_sub(1);
    }

    /// Scroll response pane down
    pub fn scroll_response_down(&mut self) {
        self.response_scroll = self.response_scroll.saturating_add(1);
    }

    /// Toggle help visibility
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
