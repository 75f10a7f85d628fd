use std::collections::VecDeque;

use crate::types::PriceSample;

/// Two hours.
pub const DEFAULT_MAX_AGE_MS: u64 = 2 * 60 * 60 * 1_000;

/// Time-bounded window of price samples, ordered by insertion.
///
/// A sample survives while `now - ts < max_age`, where `now` is the
/// timestamp of the most recent push.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    values: VecDeque<PriceSample>,
    max_age_ms: u64,
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE_MS)
    }
}

impl RollingWindow {
    pub fn new(max_age_ms: u64) -> Self {
        Self {
            values: VecDeque::new(),
            max_age_ms,
        }
    }

    pub fn push(&mut self, ts_ms: u64, price: f64) {
        self.values.push_back(PriceSample { ts_ms, price });
        self.evict_old(ts_ms);
    }

    /// Evict values older than max_age
    fn evict_old(&mut self, now_ms: u64) {
        while let Some(front) = self.values.front() {
            if now_ms.saturating_sub(front.ts_ms) >= self.max_age_ms {
                self.values.pop_front();
            } else {
                break;
            }
        }
    }

    /// The two most recent samples, oldest first.
    pub fn last_two(&self) -> Option<(PriceSample, PriceSample)> {
        let n = self.values.len();
        if n < 2 {
            return None;
        }
        Some((self.values[n - 2], self.values[n - 1]))
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.back().map(|v| v.price)
    }

    pub fn oldest(&self) -> Option<f64> {
        self.values.front().map(|v| v.price)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceSample> {
        self.values.iter()
    }
}
