//! Statistical aggregation of trial data.
//!
//! Pure and deterministic: no I/O, no clock access. The median uses the
//! lower-middle convention — for a sorted sequence of N durations it is the
//! element at index `N / 2` under integer division. For the even trial
//! counts this harness runs that is NOT the textbook average of the two
//! central elements; the convention is preserved exactly because changing
//! it would silently change reported benchmark numbers.

use crate::error::BenchmarkError;
use crate::types::{SummaryStatistics, TrialSet};

/// Bytes in one GiB (1024³).
const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// Compute summary statistics for a completed trial set.
///
/// Fails with [`BenchmarkError::InsufficientSamples`] when fewer than two
/// trials were recorded, and with [`BenchmarkError::DegenerateTiming`] when
/// the median duration is zero (infinite throughput is never reported).
pub fn summarize(set: &TrialSet) -> Result<SummaryStatistics, BenchmarkError> {
    summarize_durations(set.durations_secs(), set.byte_size())
}

/// Compute summary statistics from raw durations and a payload size.
///
/// Same contract as [`summarize`]; exposed separately so callers holding
/// plain measurement data can aggregate without building a [`TrialSet`].
pub fn summarize_durations(
    durations: &[f64],
    byte_size: u64,
) -> Result<SummaryStatistics, BenchmarkError> {
    let n = durations.len();
    if n < 2 {
        return Err(BenchmarkError::InsufficientSamples(n));
    }
    // NaN cannot be ordered; it indicates an upstream clock fault and must
    // not be sorted as if it were a value.
    if let Some(&nan) = durations.iter().find(|d| d.is_nan()) {
        return Err(BenchmarkError::InvalidDuration(nan));
    }

    let mut sorted = durations.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    // Lower-middle median: index N/2 under integer division.
    let median_secs = sorted[n / 2];
    if median_secs <= 0.0 {
        return Err(BenchmarkError::DegenerateTiming);
    }

    let variance = sample_variance(durations);
    let bytes_per_sec = byte_size as f64 / median_secs;

    Ok(SummaryStatistics {
        median_secs,
        variance,
        std_dev: variance.sqrt(),
        bytes_per_sec,
        gib_per_sec: bytes_per_sec / BYTES_PER_GIB,
    })
}

/// Unbiased sample variance: squared deviations from the mean over (N − 1).
///
/// The (N − 1) denominator is the sample estimator, not the population
/// variance; callers guarantee N ≥ 2.
fn sample_variance(durations: &[f64]) -> f64 {
    let n = durations.len() as f64;
    let mean = durations.iter().sum::<f64>() / n;
    let sum_of_squares: f64 = durations.iter().map(|d| (d - mean) * (d - mean)).sum();
    sum_of_squares / (n - 1.0)
}
