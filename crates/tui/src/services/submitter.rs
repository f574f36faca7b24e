//! Prompt submission service.
//!
//! Bridges the async HTTP calls back into the message loop: every outcome
//! becomes an [`AppMsg`] so the reducer stays the single place where state
//! changes.

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use alp_common::ModelTier;

use crate::{
    application::state::ComparisonResults,
    message::AppMsg,
    services::ApiService,
};

/// Service for dispatching prompt submissions.
#[derive(Clone)]
pub struct PromptSubmitter {
    api: ApiService,
    sender: mpsc::UnboundedSender<AppMsg>,
}

impl PromptSubmitter {
    pub fn new(api: ApiService, sender: mpsc::UnboundedSender<AppMsg>) -> Self {
        Self { api, sender }
    }

    /// Submit a prompt to a single tier.
    pub async fn submit(&self, prompt: String, tier: ModelTier) {
        match self.api.generate(&prompt, tier).await {
            Ok(response) => {
                info!(model = %response.model, "Submission succeeded");
                let _ = self.sender.send(AppMsg::SubmissionCompleted(response));
            }
            Err(e) => {
                error!(error = %e, tier = %tier, "Submission failed");
                let _ = self.sender.send(AppMsg::SubmissionFailed(e.user_message()));
            }
        }
    }

    /// Run the prompt against all three tiers concurrently.
    ///
    /// Individual tier failures are tolerated; the run only fails when no
    /// tier answers.
    pub async fn run_comparison(&self, prompt: String) {
        let (full, eight_bit, four_bit) = tokio::join!(
            self.api.generate(&prompt, ModelTier::Full),
            self.api.generate(&prompt, ModelTier::EightBit),
            self.api.generate(&prompt, ModelTier::FourBit),
        );

        for (tier, result) in [
            (ModelTier::Full, &full),
            (ModelTier::EightBit, &eight_bit),
            (ModelTier::FourBit, &four_bit),
        ] {
            if let Err(e) = result {
                warn!(tier = %tier, error = %e, "Comparison tier failed");
            }
        }

        let results = ComparisonResults {
            full: full.ok(),
            eight_bit: eight_bit.ok(),
            four_bit: four_bit.ok(),
        };

        if results.is_empty() {
            let _ = self
                .sender
                .send(AppMsg::ComparisonFailed("All model requests failed".to_string()));
        } else {
            let _ = self
                .sender
                .send(AppMsg::ComparisonCompleted(Box::new(results)));
        }
    }
}
