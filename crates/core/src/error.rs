//! Error taxonomy shared by every crate in the workspace
//!
//! All fallible operations return [`DenkmalResult`]. There is no retry logic
//! anywhere in the system: every operation is a one-shot synchronous read and
//! failures propagate to the immediate caller.

use thiserror::Error;

/// Workspace-wide error type.
#[derive(Debug, Error)]
pub enum DenkmalError {
    /// A dataset or config file could not be read.
    ///
    /// Fatal at service construction time; there is no recovery path.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The seed dataset failed to parse, or failed referential-integrity
    /// validation while the tables were being built.
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    /// The service config file failed to parse.
    #[error("malformed config: {0}")]
    MalformedConfig(String),

    /// A join encountered an id that the referenced table does not contain.
    ///
    /// Integrity is validated when the dataset is built, so hitting this at
    /// query time means the tables were corrupted after construction.
    #[error("dangling {relation} reference: id {id}")]
    DanglingReference {
        /// Name of the referenced relation (e.g. "location").
        relation: &'static str,
        /// The id that failed to resolve.
        id: u32,
    },
}

/// Result alias used across all denkmal crates.
pub type DenkmalResult<T> = std::result::Result<T, DenkmalError>;
