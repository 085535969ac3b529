//! Synthetic company record generator for lightning-seed.
//!
//! This crate provides the `RecordGenerator` which derives a `CompanyRecord`
//! from a global sequence index. The company identifier is a pure function of
//! the index; every other field is drawn from a random source.
//!
//! # Architecture
//!
//! ```text
//!   sequence index
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - entropy rng   │
//! │    or seed       │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    CompanyRecord { company_id, name, status, address, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::{company_id, RecordGenerator};
//!
//! let mut generator = RecordGenerator::with_seed(42);
//! let record = generator.generate(0);
//! assert_eq!(record.company_id, "GB000000000001");
//! assert_eq!(company_id(41), "GB000000000042");
//! ```
//!
//! # Determinism
//!
//! Calling `generate` twice with the same index always yields the same
//! `company_id`. The remaining fields are only reproducible when the
//! generator was built with [`RecordGenerator::with_seed`]; an
//! entropy-seeded generator produces fresh values on every call.

pub mod generator;
pub mod generators;
pub mod record;

// Re-exports for convenience
pub use generator::RecordGenerator;
pub use generators::identifier::{company_id, COMPANY_ID_PREFIX, COMPANY_ID_WIDTH};
pub use record::{CompanyRecord, CompanyStatus, COLUMNS, TABLE_NAME};
