//! Batch descriptive statistics and naive fraud-risk scoring over payment
//! transaction records loaded from a delimited text file.
//!
//! The crate is a one-shot pipeline: a [`CsvLoader`] decodes the file into
//! records, a [`Snapshot`] holds them immutably with grouping tallies built
//! once, and [`Analytics`] answers queries and risk scores against that
//! snapshot.

pub mod analytics;
pub mod loader;
pub mod models;
pub mod store;

pub use analytics::Analytics;
pub use loader::{CsvLoader, DecodeError, TransactionSource};
pub use models::Transaction;
pub use store::Snapshot;
