//! Marketplace-wide counters shown in the global stats bar.
//!
//! The demo has no live feed; the counters start from the marketplace's
//! launch figures and drift upward on a fixed cadence to read as live.

use rand::Rng;

/// Seconds between drift steps.
pub const DRIFT_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketStats {
    pub agents_online: u64,
    pub transactions_24h: u64,
    /// Total value settled, in millions of USD.
    pub value_settled_m: f64,
}

impl Default for MarketStats {
    fn default() -> Self {
        Self {
            agents_online: 1421,
            transactions_24h: 1_200_000,
            value_settled_m: 3.4,
        }
    }
}

impl MarketStats {
    /// Advance the counters by one drift step. Counters only ever grow.
    pub fn drift<R: Rng>(&mut self, rng: &mut R) {
        self.agents_online += rng.gen_range(0..3);
        self.transactions_24h += rng.gen_range(0..100);
        self.value_settled_m += rng.gen_range(0.0..0.01);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_drift_is_monotonic() {
        let mut rng = rand::thread_rng();
        let mut stats = MarketStats::default();
        for _ in 0..50 {
            let before = stats;
            stats.drift(&mut rng);
            assert!(stats.agents_online >= before.agents_online);
            assert!(stats.transactions_24h >= before.transactions_24h);
            assert!(stats.value_settled_m >= before.value_settled_m);
        }
    }

    #[test]
    fn test_drift_steps_are_bounded() {
        let mut rng = StepRng::new(u64::MAX, 0);
        let mut stats = MarketStats::default();
        let before = stats;
        stats.drift(&mut rng);
        assert!(stats.agents_online - before.agents_online < 3);
        assert!(stats.transactions_24h - before.transactions_24h < 100);
        assert!(stats.value_settled_m - before.value_settled_m < 0.01);
    }
}
