//! # ALP TUI Library
//!
//! Terminal dashboard for the Adaptive LLaMA Proxy. The user types a
//! prompt, watches the heuristic complexity score and the resulting tier
//! selection update live (debounced), submits the prompt through the proxy,
//! and inspects the returned latency/memory metrics - including a
//! comparison mode that runs the same prompt against all three tiers.
//!
//! ## Architecture
//!
//! The application follows the Elm model/update/view pattern:
//!
//! - **Model**: a single explicitly-owned [`application::AppModel`]
//! - **Update**: a pure reducer over [`message::AppMsg`] values
//! - **View**: stateless render functions over the model
//! - **Services**: async side effects (HTTP submission, debounce timer)
//!   that communicate back through messages

pub mod application;
pub mod config;
pub mod error;
pub mod message;
pub mod services;

// Re-export main types for convenience
pub use application::AppModel;
pub use config::Config;
pub use error::{Error, Result};
