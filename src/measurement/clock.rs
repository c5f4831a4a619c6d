//! Monotonic wall-clock timing.
//!
//! Trial durations come from `std::time::Instant`, which is monotonic and
//! immune to wall-clock adjustments (NTP, timezone, DST) with well under
//! microsecond resolution on every supported platform. The [`Clock`] trait
//! exists so the trial runner can be exercised with a scripted clock in
//! tests.

use std::time::Instant;

use crate::error::BenchmarkError;

/// Source of monotonically non-decreasing timestamps in seconds.
pub trait Clock {
    /// Current timestamp in seconds since an arbitrary fixed origin.
    fn now_secs(&mut self) -> f64;
}

/// Production clock backed by [`Instant`].
///
/// Timestamps are seconds elapsed since the clock was created. `Instant`
/// guarantees monotonicity, so [`elapsed_secs`] failing with a clock
/// anomaly on this implementation would indicate a platform bug.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_secs(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Compute the duration between two timestamps in seconds.
///
/// A negative or non-finite result means the clock went backward or
/// produced garbage; that is a fatal invariant violation and is surfaced
/// as an error, never clamped silently.
pub fn elapsed_secs(start: f64, end: f64) -> Result<f64, BenchmarkError> {
    let elapsed = end - start;
    if !elapsed.is_finite() || elapsed < 0.0 {
        return Err(BenchmarkError::ClockAnomaly { start, end });
    }
    Ok(elapsed)
}
