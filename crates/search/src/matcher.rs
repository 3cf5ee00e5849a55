//! Per-facet field matching
//!
//! A facet is one independent search dimension: monument name, address
//! street, or participant name. The matcher is a thin shell: it issues one
//! case-insensitive substring query through the [`FacetSource`] seam and
//! scores each returned field value against the token. Ordering is imposed
//! later by the ranker.

use crate::scorer::similarity;
use denkmal_core::{DenkmalResult, Monument};
use denkmal_storage::{Dataset, FieldMatch};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// One search dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    /// Match against the monument name.
    Name,
    /// Match against the joined address street.
    Location,
    /// Match against joined participant names.
    Participant,
}

impl Facet {
    /// All facets, in the order the orchestrator runs them.
    pub const ALL: [Facet; 3] = [Facet::Name, Facet::Location, Facet::Participant];
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::Name => write!(f, "name"),
            Facet::Location => write!(f, "location"),
            Facet::Participant => write!(f, "participant"),
        }
    }
}

/// A scored match produced by one facet for one token.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub score: f64,
    pub monument: Monument,
}

/// Seam to the storage layer.
///
/// The search pipeline only needs one operation: a case-insensitive
/// "contains substring" query against one facet's designated text field,
/// returning every matching monument paired with the matched field value.
/// Tests substitute in-memory fakes for this trait.
pub trait FacetSource {
    /// Query one facet's field for rows containing `needle`.
    fn field_matches(&self, facet: Facet, needle: &str) -> DenkmalResult<Vec<FieldMatch>>;
}

impl FacetSource for Dataset {
    fn field_matches(&self, facet: Facet, needle: &str) -> DenkmalResult<Vec<FieldMatch>> {
        match facet {
            Facet::Name => self.monuments_with_name_containing(needle),
            Facet::Location => self.monuments_with_street_containing(needle),
            Facet::Participant => self.monuments_with_participant_containing(needle),
        }
    }
}

impl<S: FacetSource> FacetSource for Arc<S> {
    fn field_matches(&self, facet: Facet, needle: &str) -> DenkmalResult<Vec<FieldMatch>> {
        (**self).field_matches(facet, needle)
    }
}

/// Run one token through one facet's substring query and score every hit.
///
/// Candidates come back in storage iteration order. Storage errors propagate
/// unchanged; there is no local recovery.
pub fn match_field<S: FacetSource>(
    source: &S,
    facet: Facet,
    token: &str,
) -> DenkmalResult<Vec<Candidate>> {
    let candidates = source
        .field_matches(facet, token)?
        .into_iter()
        .map(|m| Candidate {
            score: similarity(&m.field, token),
            monument: m.monument,
        })
        .collect();
    Ok(candidates)
}
