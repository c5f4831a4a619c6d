//! OS file-cache invalidation.
//!
//! Every trial must read genuinely cold data, so before each timed load the
//! harness asks the operating system to flush dirty pages and drop its
//! page/file cache. The mechanism is platform-specific and inherently
//! best-effort: on some platforms or permission levels the drop request is
//! denied, in which case the trial proceeds under a warning so results can
//! be interpreted with that caveat. What is never allowed is silently
//! degrading to a no-op on a platform with no strategy at all — that would
//! produce warm-cache numbers mislabeled as cold-cache.

use std::process::Command;

use tracing::warn;

use crate::error::BenchmarkError;

/// Path Linux exposes for dropping clean page-cache contents.
#[cfg(target_os = "linux")]
const DROP_CACHES: &str = "/proc/sys/vm/drop_caches";

/// Capability interface for forced cache eviction.
///
/// The trial runner calls this exactly once per trial, before the timed
/// load. Implemented by [`HostCacheInvalidator`] in production and by
/// scripted doubles in the runner's tests.
pub trait CacheInvalidator {
    /// Request a flush + drop of OS file-cache contents.
    ///
    /// Returns an error only when the request itself cannot be issued;
    /// partial eviction is reported as a warning, not a failure.
    fn invalidate(&mut self) -> Result<(), BenchmarkError>;
}

/// Platform strategy for evicting OS file caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushStrategy {
    /// Flush dirty pages, then purge the buffer cache outright.
    /// `sync` followed by `purge`; the macOS semantics.
    FullFlushPurge,

    /// Flush dirty pages, then ask the kernel to drop clean cache pages.
    /// `sync(2)` followed by writing `3` to `/proc/sys/vm/drop_caches`;
    /// the Linux semantics. The drop needs root and is best-effort.
    SyncBestEffort,
}

/// Cache invalidator for the host operating system.
///
/// The strategy is selected once at startup by [`HostCacheInvalidator::for_host`]
/// rather than branching at each call site.
#[derive(Debug, Clone)]
pub struct HostCacheInvalidator {
    strategy: FlushStrategy,
}

impl HostCacheInvalidator {
    /// Select the flush strategy for the host platform.
    ///
    /// Fails fast with [`BenchmarkError::UnsupportedPlatform`] when neither
    /// strategy applies.
    pub fn for_host() -> Result<Self, BenchmarkError> {
        #[cfg(target_os = "macos")]
        {
            Ok(Self {
                strategy: FlushStrategy::FullFlushPurge,
            })
        }

        #[cfg(target_os = "linux")]
        {
            Ok(Self {
                strategy: FlushStrategy::SyncBestEffort,
            })
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            Err(BenchmarkError::UnsupportedPlatform(std::env::consts::OS))
        }
    }

    /// The strategy this invalidator was configured with.
    pub fn strategy(&self) -> FlushStrategy {
        self.strategy
    }

    /// macOS: `sync` then `purge`.
    ///
    /// `purge` requires root; a non-zero exit is a partial failure and is
    /// downgraded to a warning.
    fn full_flush_purge(&self) -> Result<(), BenchmarkError> {
        let sync_status = Command::new("sync")
            .status()
            .map_err(|e| BenchmarkError::CacheFlush(format!("could not spawn sync: {e}")))?;
        if !sync_status.success() {
            return Err(BenchmarkError::CacheFlush(format!(
                "sync exited with {sync_status}"
            )));
        }

        match Command::new("purge").status() {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => {
                warn!(%status, "purge did not complete; cache may be partially warm");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "could not run purge; cache may be partially warm");
                Ok(())
            }
        }
    }

    /// Linux: `sync(2)` then write `3` to `/proc/sys/vm/drop_caches`.
    ///
    /// The write needs root; a denied write is a partial failure and is
    /// downgraded to a warning.
    #[cfg(target_os = "linux")]
    fn sync_best_effort(&self) -> Result<(), BenchmarkError> {
        // sync(2) cannot fail; it blocks until dirty pages are queued.
        unsafe { libc::sync() };

        if let Err(e) = std::fs::write(DROP_CACHES, "3\n") {
            warn!(
                error = %e,
                "could not drop page cache (run as root for full eviction); \
                 results may include warm-cache reads"
            );
        }
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn sync_best_effort(&self) -> Result<(), BenchmarkError> {
        // Strategy selection is cfg-gated, so this arm is unreachable in
        // practice; keep it honest rather than panicking.
        Err(BenchmarkError::UnsupportedPlatform(std::env::consts::OS))
    }
}

impl CacheInvalidator for HostCacheInvalidator {
    fn invalidate(&mut self) -> Result<(), BenchmarkError> {
        match self.strategy {
            FlushStrategy::FullFlushPurge => self.full_flush_purge(),
            FlushStrategy::SyncBestEffort => self.sync_best_effort(),
        }
    }
}
