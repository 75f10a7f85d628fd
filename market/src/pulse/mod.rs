//! Market Pulse Abstraction
//!
//! A Pulse is a stateful observer that derives a single market signal
//! from a stream of price observations.

pub mod trend;

pub use self::trend::{TrendConfig, TrendPulse, TrendPulseResult};

/// Default directional threshold, in percent.
pub const DEFAULT_THRESHOLD_PCT: f64 = 0.5;

/// Single price observation fed into a pulse.
#[derive(Debug, Clone, Copy)]
pub struct PriceInput {
    pub ts_ms: u64,
    pub price: f64,
}

/// Trait for deriving signals from price observations.
///
/// Implementors own their rolling state and stay deterministic for a given
/// input sequence.
pub trait Pulse {
    type Input;
    type Output;

    /// Ingests one observation and returns the signal computed after it.
    fn evaluate(&mut self, input: Self::Input) -> Self::Output;
}
