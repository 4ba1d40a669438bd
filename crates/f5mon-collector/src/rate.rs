use std::collections::HashMap;

use chrono::{DateTime, Utc};

struct CounterState {
    last_value: f64,
    last_seen: DateTime<Utc>,
}

/// Converts cumulative counter samples into per-second rates.
///
/// State is keyed by the fully qualified metric name, which already
/// encodes entity identity, so distinct entities never share a baseline.
/// Entries are created lazily and never evicted; a metric that stops
/// arriving simply stops being updated. Growth is bounded by the number
/// of distinct entities the device is configured with.
#[derive(Default)]
pub struct RateEngine {
    state: HashMap<String, CounterState>,
}

impl RateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes `value` for `key` at `now` and returns the per-second
    /// rate since the previous observation.
    ///
    /// The first observation of a key establishes the baseline and
    /// returns 0. A non-positive elapsed time returns 0 while still
    /// updating the stored state. A counter that went backwards (device
    /// reset) yields a negative rate, passed through unmodified.
    pub fn rate(&mut self, key: &str, value: f64, now: DateTime<Utc>) -> f64 {
        match self.state.get_mut(key) {
            None => {
                self.state.insert(
                    key.to_string(),
                    CounterState {
                        last_value: value,
                        last_seen: now,
                    },
                );
                0.0
            }
            Some(state) => {
                let elapsed = (now - state.last_seen).num_milliseconds() as f64 / 1000.0;
                let previous = state.last_value;
                state.last_value = value;
                state.last_seen = now;
                if elapsed <= 0.0 {
                    0.0
                } else {
                    (value - previous) / elapsed
                }
            }
        }
    }

    /// Number of tracked counter keys.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn first_observation_returns_zero() {
        let mut engine = RateEngine::new();
        let t0 = Utc::now();
        assert_eq!(engine.rate("Throughput/Client/In", 8000.0, t0), 0.0);
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn subsequent_observation_yields_delta_over_elapsed() {
        let mut engine = RateEngine::new();
        let t0 = Utc::now();
        engine.rate("k", 1000.0, t0);
        let rate = engine.rate("k", 1600.0, t0 + Duration::seconds(60));
        assert!((rate - 10.0).abs() < 1e-9);
    }

    #[test]
    fn identical_timestamp_returns_zero_not_div_error() {
        let mut engine = RateEngine::new();
        let t0 = Utc::now();
        engine.rate("k", 100.0, t0);
        assert_eq!(engine.rate("k", 200.0, t0), 0.0);
        // State still advanced to the newer sample.
        let rate = engine.rate("k", 300.0, t0 + Duration::seconds(10));
        assert!((rate - 10.0).abs() < 1e-9);
    }

    #[test]
    fn backwards_time_returns_zero() {
        let mut engine = RateEngine::new();
        let t0 = Utc::now();
        engine.rate("k", 100.0, t0);
        assert_eq!(engine.rate("k", 200.0, t0 - Duration::seconds(5)), 0.0);
    }

    #[test]
    fn counter_reset_passes_negative_rate_through() {
        let mut engine = RateEngine::new();
        let t0 = Utc::now();
        engine.rate("k", 5000.0, t0);
        let rate = engine.rate("k", 100.0, t0 + Duration::seconds(10));
        assert!((rate - (-490.0)).abs() < 1e-9);
    }

    #[test]
    fn keys_do_not_share_baselines() {
        let mut engine = RateEngine::new();
        let t0 = Utc::now();
        engine.rate("Pools/Requests/a", 100.0, t0);
        // First sight of pool b: baseline, not a delta against pool a.
        assert_eq!(
            engine.rate("Pools/Requests/b", 900.0, t0 + Duration::seconds(60)),
            0.0
        );
        let rate = engine.rate("Pools/Requests/a", 160.0, t0 + Duration::seconds(60));
        assert!((rate - 1.0).abs() < 1e-9);
    }
}
