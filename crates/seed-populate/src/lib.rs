//! Common types and utilities for lightning-seed populators.
//!
//! This crate provides the sink-independent half of the load pipeline:
//! shared CLI arguments, run configuration, the partition planner, the
//! shared progress counter with its reporter, and populate metrics.

pub mod args;
pub mod config;
pub mod metrics;
pub mod partition;
pub mod progress;

pub use args::CommonPopulateArgs;
pub use config::{ConfigError, PopulateConfig};
pub use metrics::{PartitionOutcome, PopulateMetrics};
pub use partition::{describe_partitioning, plan_partitions, Partition};
pub use progress::{format_duration, ProgressCounter, ProgressReporter, ProgressSnapshot};
