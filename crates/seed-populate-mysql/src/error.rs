//! Error types for the MySQL populator.

use crate::populator::PopulateReport;
use seed_populate::{ConfigError, Partition};
use thiserror::Error;

/// Errors that can occur during MySQL population.
#[derive(Error, Debug)]
pub enum MySQLPopulatorError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// The connection string could not be parsed.
    #[error("Invalid connection string: {0}")]
    ConnectionString(String),

    /// Invalid run parameters.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error reported by a non-MySQL sink implementation.
    #[error("Sink error: {0}")]
    Sink(String),

    /// The worker stopped because another worker failed.
    #[error("Cancelled after another worker failed")]
    Cancelled,

    /// A worker task panicked or was aborted.
    #[error("Worker task failed: {0}")]
    Join(String),

    /// One or more partitions could not be loaded.
    #[error("{}", .0.failure_summary())]
    Partitions(Box<PopulateReport>),
}

/// A worker that did not finish its partition.
#[derive(Error, Debug)]
#[error("worker {} {}: {error}", .partition.worker_id, .partition)]
pub struct PartitionFailure {
    pub partition: Partition,
    pub error: Box<MySQLPopulatorError>,
}

impl PartitionFailure {
    pub fn new(partition: Partition, error: MySQLPopulatorError) -> Self {
        Self {
            partition,
            error: Box::new(error),
        }
    }

    /// Whether the worker stopped only because of another worker's failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(*self.error, MySQLPopulatorError::Cancelled)
    }
}
