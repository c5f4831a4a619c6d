//! Configuration for benchmark runs.

use crate::error::BenchmarkError;

/// Default number of trials per run.
pub const DEFAULT_TRIALS: usize = 10;

/// Configuration options for a benchmark run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of timed trials (default: 10).
    ///
    /// Fixed before the run starts; not adjustable mid-run. Must be at
    /// least 2 so that sample variance has an (N - 1) denominator.
    pub trials: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
        }
    }
}

impl Config {
    /// Create a configuration with the default trial count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trials.
    pub fn trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.trials < 2 {
            return Err(BenchmarkError::InsufficientSamples(self.trials));
        }
        Ok(())
    }
}
