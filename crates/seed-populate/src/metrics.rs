//! Metrics from a populate operation.

use crate::partition::Partition;
use crate::progress::format_duration;
use std::time::Duration;

/// Counters collected while loading records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulateMetrics {
    /// Number of rows inserted.
    pub rows_inserted: u64,
    /// Number of INSERT statements executed.
    pub batch_count: u64,
    /// Number of transactions committed.
    pub commit_count: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Fold the counters of another worker into these.
    ///
    /// Durations are not summed: workers run in parallel, so the aggregate
    /// keeps the longest one.
    pub fn merge(&mut self, other: &PopulateMetrics) {
        self.rows_inserted += other.rows_inserted;
        self.batch_count += other.batch_count;
        self.commit_count += other.commit_count;
        self.total_duration = self.total_duration.max(other.total_duration);
    }

    /// Final line printed after a run.
    pub fn summary_line(&self) -> String {
        format!(
            "Seeded {} companies in {} ({:.2} records/sec)",
            self.rows_inserted,
            format_duration(self.total_duration),
            self.rows_per_second()
        )
    }
}

/// Result of one worker that loaded its whole partition.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionOutcome {
    pub partition: Partition,
    pub metrics: PopulateMetrics,
}
