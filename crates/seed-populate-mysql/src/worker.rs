//! Partition worker: generates, batches, and commits one index range.
//!
//! A worker moves through `Generating → Batching → Flushing → Committing`
//! until its range is exhausted (`Done`) or a statement fails (`Aborted`).
//! On failure it rolls back the open transaction, cancels the shared token so
//! the other workers stop at their next flush, and reports the failure to the
//! coordinator instead of ending the process.

use crate::error::{MySQLPopulatorError, PartitionFailure};
use crate::session::{apply_best_effort, worker_session_settings};
use crate::sink::{SinkConnection, SinkConnector};
use seed_generator::{RecordGenerator, COLUMNS, TABLE_NAME};
use seed_populate::{Partition, PartitionOutcome, PopulateMetrics, ProgressCounter};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

/// Loads one partition over its own connection.
pub struct PartitionWorker<C: SinkConnector> {
    partition: Partition,
    batch_size: usize,
    commit_interval: usize,
    connector: Arc<C>,
    counter: ProgressCounter,
    cancel: CancellationToken,
    generator: RecordGenerator,
}

impl<C: SinkConnector> PartitionWorker<C> {
    pub fn new(
        partition: Partition,
        connector: Arc<C>,
        counter: ProgressCounter,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            partition,
            batch_size: crate::insert::DEFAULT_BATCH_SIZE,
            commit_interval: crate::insert::DEFAULT_COMMIT_INTERVAL,
            connector,
            counter,
            cancel,
            generator: RecordGenerator::new(),
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_commit_interval(mut self, commit_interval: usize) -> Self {
        self.commit_interval = commit_interval.max(1);
        self
    }

    pub fn with_generator(mut self, generator: RecordGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Load the whole partition.
    pub async fn run(mut self) -> Result<PartitionOutcome, PartitionFailure> {
        let start_time = Instant::now();
        let partition = self.partition;
        let worker_id = partition.worker_id;

        if partition.is_empty() {
            debug!("Worker {}: empty partition, nothing to do", worker_id);
            return Ok(PartitionOutcome {
                partition,
                metrics: PopulateMetrics::default(),
            });
        }

        let mut conn = match self.connector.connect().await {
            Ok(conn) => conn,
            Err(e) => return Err(self.fail(e)),
        };
        apply_best_effort(&mut conn, &worker_session_settings()).await;

        let mut tx = TransactionState::default();
        let result = self.load(&mut conn, &mut tx).await;

        if result.is_err() && tx.open {
            if let Err(e) = conn.rollback().await {
                warn!("Worker {}: rollback failed: {}", worker_id, e);
            }
        }
        if let Err(e) = conn.close().await {
            warn!("Worker {}: failed to close connection: {}", worker_id, e);
        }

        match result {
            Ok(mut metrics) => {
                metrics.total_duration = start_time.elapsed();
                debug!(
                    "Worker {}: {} rows in {} batches, {} commits",
                    worker_id, metrics.rows_inserted, metrics.batch_count, metrics.commit_count
                );
                Ok(PartitionOutcome { partition, metrics })
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail(&self, error: MySQLPopulatorError) -> PartitionFailure {
        if !matches!(error, MySQLPopulatorError::Cancelled) {
            error!("Worker {}: {}", self.partition.worker_id, error);
            self.cancel.cancel();
        }
        PartitionFailure::new(self.partition, error)
    }

    async fn load(
        &mut self,
        conn: &mut C::Connection,
        tx: &mut TransactionState,
    ) -> Result<PopulateMetrics, MySQLPopulatorError> {
        let mut metrics = PopulateMetrics::default();
        let end = self.partition.end;
        let capacity = self.batch_size.min(self.partition.len() as usize);
        let mut batch = Vec::with_capacity(capacity);
        let mut flushes_since_commit = 0;

        conn.begin().await?;
        tx.open = true;

        for index in self.partition.range() {
            batch.push(self.generator.generate(index));

            let exhausted = index + 1 == end;
            if batch.len() < self.batch_size && !exhausted {
                continue;
            }

            if self.cancel.is_cancelled() {
                return Err(MySQLPopulatorError::Cancelled);
            }

            conn.insert_batch(TABLE_NAME, &COLUMNS, &batch).await?;
            let rows = batch.len() as u64;
            self.counter.add(rows);
            metrics.rows_inserted += rows;
            metrics.batch_count += 1;
            batch.clear();
            flushes_since_commit += 1;

            if flushes_since_commit >= self.commit_interval || exhausted {
                conn.commit().await?;
                tx.open = false;
                metrics.commit_count += 1;
                flushes_since_commit = 0;

                if !exhausted {
                    conn.begin().await?;
                    tx.open = true;
                }
            }
        }

        Ok(metrics)
    }
}

/// Whether a transaction is open and needs a rollback on failure.
#[derive(Debug, Default)]
struct TransactionState {
    open: bool,
}
