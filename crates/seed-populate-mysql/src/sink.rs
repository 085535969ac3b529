//! Sink boundary used by the loader.
//!
//! The workers and the session tuner only talk to the database through these
//! traits. [`crate::mysql::MySQLConnector`] is the production implementation;
//! tests plug in an in-memory sink.

use crate::error::MySQLPopulatorError;
use async_trait::async_trait;
use seed_generator::CompanyRecord;

/// Factory for exclusive sink connections.
///
/// Every worker calls [`SinkConnector::connect`] exactly once, so no pool is
/// shared between workers.
#[async_trait]
pub trait SinkConnector: Send + Sync + 'static {
    type Connection: SinkConnection + 'static;

    /// Open a new connection.
    async fn connect(&self) -> Result<Self::Connection, MySQLPopulatorError>;
}

/// One open connection, owned by a single task.
#[async_trait]
pub trait SinkConnection: Send {
    /// Execute a statement that changes a server or session setting.
    async fn apply_setting(&mut self, statement: &str) -> Result<(), MySQLPopulatorError>;

    /// Read the current value of a global variable, if it exists.
    async fn read_global(&mut self, name: &str) -> Result<Option<String>, MySQLPopulatorError>;

    /// Execute a DDL statement.
    async fn execute(&mut self, statement: &str) -> Result<(), MySQLPopulatorError>;

    /// Start a transaction.
    async fn begin(&mut self) -> Result<(), MySQLPopulatorError>;

    /// Insert all `rows` with a single multi-row statement inside the current
    /// transaction. Returns the number of affected rows.
    async fn insert_batch(
        &mut self,
        table: &str,
        columns: &[&str],
        rows: &[CompanyRecord],
    ) -> Result<u64, MySQLPopulatorError>;

    /// Commit the current transaction.
    async fn commit(&mut self) -> Result<(), MySQLPopulatorError>;

    /// Roll back the current transaction.
    async fn rollback(&mut self) -> Result<(), MySQLPopulatorError>;

    /// Count the rows of a table.
    async fn count_rows(&mut self, table: &str) -> Result<u64, MySQLPopulatorError>;

    /// Close the connection.
    async fn close(self) -> Result<(), MySQLPopulatorError>;
}
