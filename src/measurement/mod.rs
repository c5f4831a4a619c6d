//! Measurement infrastructure: the trial clock and cache invalidation.
//!
//! This module provides:
//! - Monotonic sub-microsecond timing via [`MonotonicClock`]
//! - Platform-specific OS cache eviction via [`HostCacheInvalidator`]
//!
//! # Cache-flush strategies
//!
//! Cold-cache measurement depends on the OS actually evicting file data
//! between trials. Two strategies exist, selected once at startup:
//! - **macOS**: `sync` + `purge` (full flush and purge)
//! - **Linux**: `sync(2)` + `/proc/sys/vm/drop_caches` (sync, best-effort
//!   drop; full eviction requires root)
//!
//! Unsupported platforms fail at startup rather than silently measuring
//! warm-cache reads.

mod cache;
mod clock;

pub use cache::{CacheInvalidator, FlushStrategy, HostCacheInvalidator};
pub use clock::{elapsed_secs, Clock, MonotonicClock};
