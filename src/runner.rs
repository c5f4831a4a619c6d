//! Trial orchestration: the invalidate → time → record → release loop.

use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::BenchmarkError;
use crate::measurement::{elapsed_secs, CacheInvalidator, Clock};
use crate::probe::{MatrixHandle, MatrixLoadProbe};
use crate::types::TrialSet;

/// Runs the configured number of cold-cache trials against one file.
///
/// Trials are strictly sequential, never parallel: a concurrent trial's
/// read would warm the cache for the others. Each iteration owns its matrix
/// handle exclusively and drops it before the next iteration's cache
/// invalidation.
#[derive(Debug)]
pub struct TrialRunner<C, I> {
    clock: C,
    invalidator: I,
    config: Config,
}

impl<C, I> TrialRunner<C, I>
where
    C: Clock,
    I: CacheInvalidator,
{
    /// Create a runner from a clock, an invalidator, and a validated config.
    pub fn new(clock: C, invalidator: I, config: Config) -> Result<Self, BenchmarkError> {
        config.validate()?;
        Ok(Self {
            clock,
            invalidator,
            config,
        })
    }

    /// The runner's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run all trials against `path` and return the completed trial set.
    ///
    /// Any hard failure — a flush request that cannot be issued, a load
    /// error, a clock anomaly — aborts the whole run. A failed trial is
    /// never retried and re-substituted, because that would bias the
    /// statistics toward best-case cache and OS behavior.
    pub fn run<P>(&mut self, probe: &mut P, path: &Path) -> Result<TrialSet, BenchmarkError>
    where
        P: MatrixLoadProbe,
    {
        info!(path = %path.display(), trials = self.config.trials, "starting cold-cache benchmark");

        let mut set = TrialSet::with_capacity(self.config.trials);

        for trial in 0..self.config.trials {
            self.invalidator.invalidate()?;

            let t0 = self.clock.now_secs();
            let handle = probe.load(path)?;
            let t1 = self.clock.now_secs();

            set.push_duration(elapsed_secs(t0, t1)?)?;
            set.record_byte_size(handle.byte_size());

            debug!(
                trial,
                duration_secs = set.durations_secs()[trial],
                "trial complete"
            );

            // Handle lifetime ends here, before the next invalidation; a
            // live handle could pin pages in cache.
            drop(handle);
        }

        Ok(set)
    }
}
