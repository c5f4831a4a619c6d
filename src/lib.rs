//! # coldread
//!
//! Measure cold-cache sequential read throughput of matrix-storage files.
//!
//! This crate provides a reproducible micro-benchmark methodology: before
//! every timed load the OS page/file cache is forcibly evicted, so each
//! trial measures genuine storage-device latency rather than memory-speed
//! cache hits. Trial durations are aggregated into robust summary
//! statistics (lower-middle median, unbiased sample variance, derived
//! throughput) suitable for comparison across runs, machines, or file
//! formats.
//!
//! ## Common Pitfall: Warm-Cache Contamination
//!
//! Cold-cache numbers are only meaningful when eviction actually happens.
//! On Linux, dropping the page cache requires root; without it the harness
//! still runs but logs a warning, and reported numbers may include
//! memory-speed reads. Never compare a warned run against a clean one.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use coldread::{
//!     format_report, summarize, Config, HostCacheInvalidator, MonotonicClock,
//!     RawFileProbe, TrialRunner,
//! };
//!
//! let invalidator = HostCacheInvalidator::for_host()?;
//! let mut runner = TrialRunner::new(MonotonicClock::new(), invalidator, Config::default())?;
//!
//! let mut probe = RawFileProbe::new();
//! let trials = runner.run(&mut probe, Path::new("matrix.h5"))?;
//! let stats = summarize(&trials)?;
//!
//! print!("{}", format_report(&trials, &stats));
//! ```
//!
//! A real matrix-format reader plugs in behind the [`MatrixLoadProbe`]
//! trait in place of [`RawFileProbe`]; the harness never inspects matrix
//! contents.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod runner;
mod types;

// Functional modules
pub mod measurement;
pub mod output;
pub mod probe;
pub mod statistics;

// Re-exports for public API
pub use config::{Config, DEFAULT_TRIALS};
pub use error::BenchmarkError;
pub use measurement::{elapsed_secs, CacheInvalidator, Clock, FlushStrategy, HostCacheInvalidator, MonotonicClock};
pub use output::format_report;
pub use probe::{MatrixHandle, MatrixLoadProbe, RawFileHandle, RawFileProbe};
pub use runner::TrialRunner;
pub use statistics::{summarize, summarize_durations};
pub use types::{SummaryStatistics, TrialSet};
