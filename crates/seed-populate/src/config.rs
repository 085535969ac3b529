//! Run configuration for a populate operation.

use crate::args::CommonPopulateArgs;
use std::time::Duration;
use thiserror::Error;

/// Invalid run parameters.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("batch size must be greater than zero")]
    ZeroBatchSize,

    #[error("commit interval must be greater than zero")]
    ZeroCommitInterval,

    #[error("worker count must be greater than zero")]
    ZeroWorkers,

    #[error("progress interval must be greater than zero")]
    ZeroProgressInterval,
}

/// Parameters of one load run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulateConfig {
    /// Total number of records to generate across all workers
    pub total_count: u64,
    /// Maximum rows per INSERT statement
    pub batch_size: usize,
    /// Flushes per transaction before committing
    pub commit_interval: usize,
    /// Number of parallel workers
    pub workers: usize,
    /// Optional seed for reproducible field values
    pub seed: Option<u64>,
    /// Tick interval of the progress reporter
    pub progress_interval: Duration,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            total_count: 100,
            batch_size: 100_000,
            commit_interval: 8,
            workers: num_cpus::get(),
            seed: None,
            progress_interval: Duration::from_secs(1),
        }
    }
}

impl PopulateConfig {
    /// Create a configuration for `total_count` records with default tuning.
    pub fn new(total_count: u64) -> Self {
        Self {
            total_count,
            ..Self::default()
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_commit_interval(mut self, commit_interval: usize) -> Self {
        self.commit_interval = commit_interval;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.commit_interval == 0 {
            return Err(ConfigError::ZeroCommitInterval);
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.progress_interval.is_zero() {
            return Err(ConfigError::ZeroProgressInterval);
        }
        Ok(())
    }
}

impl TryFrom<&CommonPopulateArgs> for PopulateConfig {
    type Error = ConfigError;

    fn try_from(args: &CommonPopulateArgs) -> Result<Self, Self::Error> {
        let config = PopulateConfig::new(args.row_count)
            .with_batch_size(args.batch_size)
            .with_commit_interval(args.commit_interval)
            .with_workers(args.workers.unwrap_or_else(num_cpus::get))
            .with_seed(args.seed)
            .with_progress_interval(Duration::from_millis(args.progress_interval_ms));
        config.validate()?;
        Ok(config)
    }
}
