//! Ranked multi-facet search over the monument catalog
//!
//! The pipeline, leaf first:
//! - [`tokenizer`]: raw query → deduplicated set of lowercase tokens
//! - [`scorer`]: matched field value × token → similarity score
//! - [`matcher`]: one facet's substring query, scored per row
//! - [`ranker`]: group by monument id, sum scores, sort descending
//! - [`engine`]: runs the whole thing once per facet
//!
//! [`history`] is unrelated to ranking; it shares the service lifecycle and
//! nothing else.

pub mod engine;
pub mod history;
pub mod matcher;
pub mod ranker;
pub mod scorer;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{SearchEngine, SearchResults};
pub use history::SearchHistory;
pub use matcher::{match_field, Candidate, Facet, FacetSource};
pub use ranker::{rank, RankedHit};
pub use scorer::similarity;
pub use tokenizer::tokenize;
