use crate::pulse::{DEFAULT_THRESHOLD_PCT, PriceInput, Pulse};
use crate::rolling_window::{DEFAULT_MAX_AGE_MS, RollingWindow};
use crate::types::Trend;

/// Trend Pulse
///
/// Compares the two most recent prices that are still inside the trailing
/// window:
///
/// ```text
/// change_pct = (p_now - p_prev) * 100 / p_prev
/// ```
///
/// ## Interpretation
/// - `change_pct >  threshold` → `UP`
/// - `change_pct < -threshold` → `DOWN`
/// - otherwise                 → `FLAT`
///
/// Fewer than two samples in the window, or a non-positive reference price,
/// yields `NO_DATA`.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPulseResult {
    pub trend: Trend,

    /// Latest observed price.
    pub p_now: f64,

    /// Previous price still inside the window.
    pub p_prev: Option<f64>,

    /// Percent move from `p_prev` to `p_now`.
    pub change_pct: Option<f64>,

    /// Samples retained after eviction.
    pub samples: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct TrendConfig {
    pub window_ms: u64,
    pub threshold_pct: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_MAX_AGE_MS,
            threshold_pct: DEFAULT_THRESHOLD_PCT,
        }
    }
}

/// Trend pulse state for one symbol.
#[derive(Clone, Debug)]
pub struct TrendPulse {
    window: RollingWindow,
    threshold_pct: f64,
}

impl TrendPulse {
    pub fn new(cfg: TrendConfig) -> Self {
        Self {
            window: RollingWindow::new(cfg.window_ms),
            threshold_pct: cfg.threshold_pct,
        }
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }
}

impl Pulse for TrendPulse {
    type Input = PriceInput;
    type Output = TrendPulseResult;

    fn evaluate(&mut self, input: Self::Input) -> Self::Output {
        compute_trend(input.ts_ms, input.price, &mut self.window, self.threshold_pct)
    }
}

/// Maps a percent move onto a trend label. Both bounds are strict.
pub fn classify(change_pct: f64, threshold_pct: f64) -> Trend {
    if change_pct > threshold_pct {
        Trend::Up
    } else if change_pct < -threshold_pct {
        Trend::Down
    } else {
        Trend::Flat
    }
}

/// Percent move from `older` to `newer`, `None` when `older` is not a
/// usable reference.
pub fn percent_change(older: f64, newer: f64) -> Option<f64> {
    if older <= 0.0 || !older.is_finite() {
        return None;
    }
    let pct = (newer - older) * 100.0 / older;
    pct.is_finite().then_some(pct)
}

fn compute_trend(
    ts_ms: u64,
    price: f64,
    window: &mut RollingWindow,
    threshold_pct: f64,
) -> TrendPulseResult {
    window.push(ts_ms, price);

    let Some((older, newer)) = window.last_two() else {
        return TrendPulseResult {
            trend: Trend::NoData,
            p_now: price,
            p_prev: None,
            change_pct: None,
            samples: window.len(),
        };
    };

    let change_pct = percent_change(older.price, newer.price);
    let trend = change_pct.map_or(Trend::NoData, |pct| classify(pct, threshold_pct));

    TrendPulseResult {
        trend,
        p_now: newer.price,
        p_prev: Some(older.price),
        change_pct,
        samples: window.len(),
    }
}
