//! Work partitioning across workers.
//!
//! Splits the global index space into contiguous, disjoint ranges so that
//! every sequence index is generated by exactly one worker.

use std::fmt;
use std::ops::Range;

/// Half-open index range `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub worker_id: usize,
    pub start: u64,
    pub end: u64,
}

impl Partition {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<u64> {
        self.start..self.end
    }

    /// Number of INSERT statements needed for this partition.
    pub fn flush_count(&self, batch_size: usize) -> u64 {
        self.len().div_ceil(batch_size as u64)
    }

    /// Number of commits needed for this partition.
    pub fn commit_count(&self, batch_size: usize, commit_interval: usize) -> u64 {
        self.flush_count(batch_size).div_ceil(commit_interval as u64)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Partition `total_count` indices across `worker_count` workers.
///
/// Every worker gets `total_count / worker_count` indices; the last worker
/// also absorbs the remainder. When there are fewer indices than workers,
/// all but the last partition are empty.
///
/// # Panics
///
/// Panics if `worker_count` is zero.
pub fn plan_partitions(total_count: u64, worker_count: usize) -> Vec<Partition> {
    assert!(worker_count > 0, "worker_count must be greater than zero");

    let workers = worker_count as u64;
    let size = total_count / workers;

    (0..worker_count)
        .map(|worker_id| {
            let start = worker_id as u64 * size;
            let end = if worker_id == worker_count - 1 {
                total_count
            } else {
                start + size
            };
            Partition {
                worker_id,
                start,
                end,
            }
        })
        .collect()
}

/// Describe the partitioning plan for logging.
pub fn describe_partitioning(partitions: &[Partition]) -> String {
    let mut lines = Vec::new();
    lines.push("Work distribution:".to_string());

    for partition in partitions {
        let detail = if partition.is_empty() {
            "(no records)".to_string()
        } else {
            format!("{} records", partition.len())
        };
        lines.push(format!(
            "  worker {}: {} {}",
            partition.worker_id, partition, detail
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(partitions: &[Partition], total: u64) {
        let mut expected_start = 0;
        for partition in partitions {
            assert_eq!(partition.start, expected_start, "gap or overlap");
            assert!(partition.start <= partition.end);
            expected_start = partition.end;
        }
        assert_eq!(expected_start, total);
    }

    #[test]
    fn test_partition_with_remainder() {
        let partitions = plan_partitions(250, 4);

        let ranges: Vec<_> = partitions.iter().map(|p| (p.start, p.end)).collect();
        assert_eq!(ranges, vec![(0, 62), (62, 124), (124, 186), (186, 250)]);
        assert_eq!(partitions[3].len(), 64);
    }

    #[test]
    fn test_partition_even_split() {
        let partitions = plan_partitions(1000, 4);
        assert!(partitions.iter().all(|p| p.len() == 250));
        assert_covers(&partitions, 1000);
    }

    #[test]
    fn test_partition_fewer_records_than_workers() {
        let partitions = plan_partitions(3, 8);

        assert_eq!(partitions.len(), 8);
        assert!(partitions[..7].iter().all(Partition::is_empty));
        assert_eq!(partitions[7].range(), 0..3);
        assert_covers(&partitions, 3);
    }

    #[test]
    fn test_partition_zero_records() {
        let partitions = plan_partitions(0, 4);

        assert_eq!(partitions.len(), 4);
        assert!(partitions.iter().all(Partition::is_empty));
        assert_covers(&partitions, 0);
    }

    #[test]
    fn test_partition_union_for_many_shapes() {
        for total in [0u64, 1, 2, 7, 99, 100, 101, 1_000, 12_345] {
            for workers in 1..=16 {
                let partitions = plan_partitions(total, workers);
                assert_eq!(partitions.len(), workers);
                assert_eq!(partitions.last().unwrap().end, total);
                assert_covers(&partitions, total);
                for (i, p) in partitions.iter().enumerate() {
                    assert_eq!(p.worker_id, i);
                }
            }
        }
    }

    #[test]
    fn test_flush_and_commit_counts() {
        let partition = Partition {
            worker_id: 0,
            start: 0,
            end: 250,
        };
        assert_eq!(partition.flush_count(100), 3);
        assert_eq!(partition.commit_count(100, 2), 2);
        assert_eq!(partition.flush_count(250), 1);

        let empty = Partition {
            worker_id: 1,
            start: 5,
            end: 5,
        };
        assert_eq!(empty.flush_count(100), 0);
        assert_eq!(empty.commit_count(100, 8), 0);
    }

    #[test]
    #[should_panic(expected = "worker_count")]
    fn test_zero_workers_panics() {
        plan_partitions(10, 0);
    }

    #[test]
    fn test_describe_partitioning() {
        let description = describe_partitioning(&plan_partitions(5, 2));

        assert!(description.contains("worker 0: [0, 2) 2 records"));
        assert!(description.contains("worker 1: [2, 5) 3 records"));

        let description = describe_partitioning(&plan_partitions(1, 2));
        assert!(description.contains("worker 0: [0, 0) (no records)"));
    }
}
