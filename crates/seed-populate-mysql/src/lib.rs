//! MySQL bulk loader for lightning-seed.
//!
//! Splits the requested record count into one contiguous index range per
//! worker, generates the records inside each worker, and loads them with
//! multi-row INSERTs grouped into multi-batch transactions. A session tuner
//! relaxes server settings for the duration of the load.
//!
//! # Architecture
//!
//! ```text
//!                    ┌──────────────────┐
//!                    │  MySQLPopulator  │── SessionTuner (admin connection)
//!                    └────────┬─────────┘
//!            plan_partitions  │  spawn
//!        ┌────────────────────┼────────────────────┐
//!        ▼                    ▼                    ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  worker 0    │     │  worker 1    │ ... │  worker N-1  │
//! │  [0, s)      │     │  [s, 2s)     │     │  [.., total) │
//! └──────┬───────┘     └──────┬───────┘     └──────┬───────┘
//!        │ own connection     │                    │
//!        └────────────► ProgressCounter ◄──────────┘
//!                             │
//!                      ProgressReporter
//! ```
//!
//! The database is reached through the [`sink`] traits so the pipeline can be
//! exercised without a server.

pub mod args;
pub mod error;
pub mod insert;
pub mod mysql;
pub mod populator;
pub mod session;
pub mod sink;
pub mod worker;

pub use args::{CommonPopulateArgs, MySQLConnectionArgs, MySQLPopulateArgs};
pub use error::{MySQLPopulatorError, PartitionFailure};
pub use insert::{DEFAULT_BATCH_SIZE, DEFAULT_COMMIT_INTERVAL};
pub use mysql::{MySQLConnection, MySQLConnector};
pub use populator::{preview, MySQLPopulator, PopulateReport};
pub use session::{SessionTuner, Setting};
pub use sink::{SinkConnection, SinkConnector};
pub use worker::PartitionWorker;
