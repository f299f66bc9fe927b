//! Per-run search statistics.

use std::time::Duration;

/// Counters collected over a single solve run.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Search loop iterations executed.
    pub iterations: u64,
    /// Steps kept after scoring.
    pub accepted: u64,
    /// Steps undone after scoring.
    pub rejected: u64,
    /// Iterations whose proposal budget ran out without a placement.
    pub failed_proposals: u64,
    /// Times half the placements were rolled back after a stall.
    pub half_resets: u64,
    /// Times every placement was rolled back after a stall.
    pub full_resets: u64,
    /// Temperature when the loop stopped.
    pub final_temperature: f64,
    /// Wall-clock time spent solving.
    pub duration: Duration,
}

impl SearchStatistics {
    /// Share of scored steps that were kept.
    ///
    /// Returns `0.0` before any step has been scored.
    pub fn acceptance_rate(&self) -> f64 {
        let scored = self.accepted + self.rejected;
        if scored == 0 {
            0.0
        } else {
            self.accepted as f64 / scored as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_rate_guards_empty_run() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.acceptance_rate(), 0.0);
    }

    #[test]
    fn test_acceptance_rate() {
        let stats = SearchStatistics {
            accepted: 3,
            rejected: 1,
            ..SearchStatistics::default()
        };
        assert_eq!(stats.acceptance_rate(), 0.75);
    }
}
