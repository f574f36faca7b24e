//! Session-level metric aggregation.

use serde::{Deserialize, Serialize};

/// Running aggregate over the latencies observed in one session.
///
/// Held in memory only; a fresh session starts from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeMetrics {
    /// Mean latency in milliseconds across all recorded requests.
    pub average_latency: f64,

    /// Number of requests folded into the average.
    pub total_requests: u64,
}

impl CumulativeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one more latency sample into the running average.
    pub fn record(&mut self, latency: f64) {
        let count = self.total_requests as f64;
        self.average_latency = (self.average_latency * count + latency) / (count + 1.0);
        self.total_requests += 1;
    }
}
