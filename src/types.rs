//! Core data types: the per-run trial record and its derived summary.

use serde::Serialize;

use crate::error::BenchmarkError;

/// Recorded timing data for one benchmark run.
///
/// An ordered, append-only sequence of trial durations plus the payload size
/// of the loaded file. Built incrementally by the trial runner, one entry
/// per trial; read-only once the configured trial count is reached. The
/// byte size is overwritten each trial and the final value persists — all
/// trials load the same file, but equality across trials is not enforced,
/// matching the lenient original design.
#[derive(Debug, Clone, Default)]
pub struct TrialSet {
    durations_secs: Vec<f64>,
    byte_size: u64,
}

impl TrialSet {
    /// Create an empty trial set with capacity for `trials` entries.
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            durations_secs: Vec::with_capacity(trials),
            byte_size: 0,
        }
    }

    /// Append one trial duration in seconds.
    ///
    /// A zero, negative, or non-finite duration indicates a clock or
    /// measurement fault and is rejected rather than silently accepted.
    pub fn push_duration(&mut self, secs: f64) -> Result<(), BenchmarkError> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(BenchmarkError::InvalidDuration(secs));
        }
        self.durations_secs.push(secs);
        Ok(())
    }

    /// Record the payload size in bytes, overwriting any previous value.
    pub fn record_byte_size(&mut self, bytes: u64) {
        self.byte_size = bytes;
    }

    /// The recorded durations, in trial order.
    pub fn durations_secs(&self) -> &[f64] {
        &self.durations_secs
    }

    /// The last recorded payload size in bytes.
    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    /// Number of recorded trials.
    pub fn len(&self) -> usize {
        self.durations_secs.len()
    }

    /// Whether no trials have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.durations_secs.is_empty()
    }
}

/// Summary statistics derived from a completed [`TrialSet`].
///
/// Immutable once computed. The median uses the lower-middle convention:
/// for the even trial counts this harness runs, it is the element at sorted
/// index N/2 under integer division, not the average of the two central
/// elements. See [`crate::statistics::summarize`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SummaryStatistics {
    /// Median trial duration in seconds (lower-middle convention).
    pub median_secs: f64,

    /// Unbiased sample variance of the durations, in seconds squared.
    pub variance: f64,

    /// Sample standard deviation in seconds.
    pub std_dev: f64,

    /// Throughput derived from the median duration, in bytes per second.
    pub bytes_per_sec: f64,

    /// Throughput in GiB per second (`bytes_per_sec` / 1024³).
    pub gib_per_sec: f64,
}
