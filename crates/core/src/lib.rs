//! Shared types for the denkmal workspace
//!
//! This crate carries the domain model (monument snapshots and their
//! satellite types) and the workspace-wide error taxonomy. Every other crate
//! depends on it; it depends on nothing but serde and thiserror.

pub mod error;
pub mod types;

pub use error::{DenkmalError, DenkmalResult};
pub use types::{Address, Era, GeoBounds, Monument, MonumentId};
