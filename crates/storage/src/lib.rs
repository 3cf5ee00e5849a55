//! In-memory relational storage for the monument catalog
//!
//! This crate owns the raw seed schema ([`rows`]) and the immutable,
//! integrity-checked [`Dataset`] the rest of the system queries. The dataset
//! is read-only for the lifetime of the process; all queries are synchronous
//! scans returning owned snapshots.

pub mod dataset;
pub mod rows;

pub use dataset::{Dataset, FieldMatch};
pub use rows::SeedData;
