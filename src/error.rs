//! Error types for the benchmark harness.

use std::path::PathBuf;

/// Error returned when a benchmark run cannot produce trustworthy numbers.
///
/// Every variant is fatal for the run it occurs in. There is deliberately no
/// retry path anywhere in the harness: re-running a failed trial and
/// substituting the result would bias the timing statistics toward best-case
/// cache and OS behavior. The one recoverable condition — a partial cache
/// flush — is downgraded to a warning before it ever reaches this type.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    /// The cache-flush request could not be issued at all.
    ///
    /// Without a flush, every subsequent trial would measure warm-cache
    /// reads mislabeled as cold-cache, so the run aborts.
    #[error("cache flush failed: {0}")]
    CacheFlush(String),

    /// The matrix probe failed to load the file.
    ///
    /// A missing trial would corrupt the statistics, so the run aborts
    /// rather than skipping and continuing.
    #[error("failed to load {path}: {source}")]
    Load {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying I/O or format error from the probe.
        #[source]
        source: std::io::Error,
    },

    /// The clock produced a timestamp pair that subtracts to a negative or
    /// non-finite duration.
    #[error("clock anomaly: start {start} s, end {end} s")]
    ClockAnomaly {
        /// Timestamp taken before the load, in seconds.
        start: f64,
        /// Timestamp taken after the load, in seconds.
        end: f64,
    },

    /// A recorded duration was zero, negative, or non-finite.
    #[error("invalid trial duration: {0} s")]
    InvalidDuration(f64),

    /// Fewer than two samples; sample variance needs an (N - 1) denominator.
    #[error("insufficient samples: got {0}, need at least 2")]
    InsufficientSamples(usize),

    /// The median duration is zero, which would yield infinite throughput.
    #[error("degenerate timing: median duration is zero")]
    DegenerateTiming,

    /// No cache-flush strategy exists for this operating system.
    ///
    /// The harness refuses to run rather than silently producing warm-cache
    /// numbers labeled as cold-cache.
    #[error("no cache invalidation strategy for platform {0}")]
    UnsupportedPlatform(&'static str),
}
