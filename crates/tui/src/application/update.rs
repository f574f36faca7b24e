//! Application update logic (Update in Elm architecture)

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info, warn};

use alp_common::analyze;

use crate::{
    application::AppModel,
    message::{AppMsg, StatusSeverity},
};

/// Update function - handles all application messages and updates the model.
///
/// Pure over the model: side effects are returned as follow-up messages for
/// the main loop to dispatch, never performed here.
pub fn update(model: &mut AppModel, msg: AppMsg) -> Result<Vec<AppMsg>> {
    let mut effects = Vec::new();

    match msg {
        // ============== System Events ==============
        AppMsg::Quit => {
            info!("Application quit requested");
            // No model changes needed, handled by main loop
        }

        AppMsg::TerminalResized(width, height) => {
            debug!(width, height, "Terminal resized");
        }

        AppMsg::Tick => {
            // Status messages fade out on their own after a while; the TTL
            // itself is applied by the caller via expire_status_message.
        }

        // ============== Input & Analysis Events ==============
        AppMsg::InputChanged(text) => {
            debug!(text_len = text.len(), "Prompt input changed");
            model.input = text;
            model.analysis_pending = true;
        }

        AppMsg::DebounceElapsed => {
            model.complexity = analyze(&model.input);
            model.analysis_pending = false;
            debug!(
                score = model.complexity.score,
                level = %model.complexity.level,
                "Complexity recomputed"
            );
        }

        // ============== Submission Events ==============
        AppMsg::PromptSubmitted => {
            if model.comparison_mode {
                warn!("Submission attempted while comparison mode is active");
                model.set_status_message(
                    StatusSeverity::Warning,
                    "Individual prompt sending is disabled in comparison mode".to_string(),
                );
            } else if model.input.trim().is_empty() {
                warn!("Submission attempted with empty prompt");
                model.set_status_message(
                    StatusSeverity::Error,
                    "Please enter a prompt before submitting".to_string(),
                );
            } else if model.is_loading {
                warn!("Submission attempted while another is in flight");
            } else {
                // Score the prompt as it stands now: a pending debounce must
                // not let a stale tier be submitted.
                model.complexity = analyze(&model.input);
                model.analysis_pending = false;

                let tier = model.selected_tier();
                let prompt = model.input.clone();
                info!(prompt_len = prompt.len(), tier = %tier, "Prompt submitted");

                model.is_loading = true;
                model.last_submission_time = Some(Utc::now());
                effects.push(AppMsg::SubmissionStarted(prompt, tier));
            }
        }

        AppMsg::SubmissionStarted(_, tier) => {
            model.set_status_message(
                StatusSeverity::Info,
                format!("Sending prompt to {}...", tier.label()),
            );
        }

        AppMsg::SubmissionCompleted(response) => {
            info!(
                model_used = %response.model,
                latency_ms = response.metrics.latency,
                "Submission completed"
            );
            model.is_loading = false;
            model.record_latency(response.metrics.latency);
            model.response_scroll = 0;
            model.set_status_message(
                StatusSeverity::Info,
                format!(
                    "Response from {} in {:.0} ms",
                    response.model, response.metrics.latency
                ),
            );
            model.last_response = Some(response);
        }

        AppMsg::SubmissionFailed(error) => {
            warn!(error = %error, "Submission failed");
            model.is_loading = false;
            model.set_status_message(
                StatusSeverity::Error,
                "An error occurred while sending the prompt. Please try again.".to_string(),
            );
        }

        // ============== Comparison Events ==============
        AppMsg::ComparisonToggled => {
            if model.comparison_mode {
                info!("Comparison mode disabled");
                model.comparison_mode = false;
                model.comparison_loading = false;
                model.comparison.clear();
                model.clear_status_message();
            } else {
                model.comparison_mode = true;
                if model.input.trim().is_empty() {
                    warn!("Comparison requested with empty prompt");
                    model.set_status_message(
                        StatusSeverity::Error,
                        "Please enter a prompt before running the comparison".to_string(),
                    );
                } else {
                    info!("Comparison mode enabled, dispatching run");
                    model.comparison_loading = true;
                    effects.push(AppMsg::ComparisonStarted(model.input.clone()));
                }
            }
        }

        AppMsg::ComparisonStarted(_) => {
            model.set_status_message(
                StatusSeverity::Info,
                "Running the prompt against all tiers...".to_string(),
            );
        }

        AppMsg::ComparisonCompleted(results) => {
            let failed = results.failed_count();
            info!(failed_tiers = failed, "Comparison completed");
            model.comparison_loading = false;
            model.comparison = *results;
            if failed > 0 {
                model.set_status_message(
                    StatusSeverity::Warning,
                    format!("Comparison finished; {} tier(s) failed", failed),
                );
            } else {
                model.set_status_message(
                    StatusSeverity::Info,
                    "Comparison finished".to_string(),
                );
            }
        }

        AppMsg::ComparisonFailed(error) => {
            warn!(error = %error, "Comparison failed");
            model.comparison_loading = false;
            model.comparison.clear();
            model.set_status_message(
                StatusSeverity::Error,
                "An error occurred while running the comparison. Please try again.".to_string(),
            );
        }

        // ============== UI Navigation Events ==============
        AppMsg::FocusNext => {
            model.focus_next_pane();
            debug!(pane = ?model.focused_pane, "Focused next pane");
        }

        AppMsg::FocusPrevious => {
            model.focus_previous_pane();
            debug!(pane = ?model.focused_pane, "Focused previous pane");
        }

        AppMsg::ResponseScrollUp => {
            model.scroll_response_up();
        }

        AppMsg::ResponseScrollDown => {
            model.scroll_response_down();
        }

        AppMsg::HelpToggle => {
            model.toggle_help();
        }

        // ============== Error Events ==============
        AppMsg::ErrorOccurred(error) => {
            warn!(error = %error, "Error occurred");
            model.set_status_message(StatusSeverity::Error, error);
        }

        AppMsg::StatusMessage(severity, message) => {
            model.set_status_message(severity, message);
        }
    }

    Ok(effects)
}
