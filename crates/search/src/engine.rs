//! Search orchestrator
//!
//! Tokenizes the query once, then runs each facet's matcher → ranker
//! pipeline independently. Facets share nothing but the token set; a storage
//! failure in any facet aborts the whole search call.

use crate::matcher::{match_field, Candidate, Facet, FacetSource};
use crate::ranker::{rank, RankedHit};
use crate::tokenizer::tokenize;
use denkmal_core::DenkmalResult;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// One ranked list per facet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub by_name: Vec<RankedHit>,
    pub by_location: Vec<RankedHit>,
    pub by_participant: Vec<RankedHit>,
}

impl SearchResults {
    /// Ranked hits for one facet.
    pub fn facet(&self, facet: Facet) -> &[RankedHit] {
        match facet {
            Facet::Name => &self.by_name,
            Facet::Location => &self.by_location,
            Facet::Participant => &self.by_participant,
        }
    }

    /// Whether every facet came back empty.
    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|f| self.facet(*f).is_empty())
    }
}

/// Runs the tokenizer once per query and the matcher → ranker pipeline once
/// per facet.
///
/// Generic over [`FacetSource`] so the pipeline can be exercised without a
/// real dataset; production wires in `Arc<Dataset>`.
#[derive(Debug)]
pub struct SearchEngine<S> {
    source: S,
}

impl<S: FacetSource> SearchEngine<S> {
    pub fn new(source: S) -> Self {
        SearchEngine { source }
    }

    /// Run a full search: tokenize, then match and rank every facet.
    ///
    /// An empty query tokenizes to nothing and returns empty facets without
    /// touching storage.
    pub fn search(&self, query: &str) -> DenkmalResult<SearchResults> {
        let tokens = tokenize(query);
        debug!(query, tokens = tokens.len(), "search");
        if tokens.is_empty() {
            return Ok(SearchResults::default());
        }

        Ok(SearchResults {
            by_name: self.rank_facet(Facet::Name, &tokens)?,
            by_location: self.rank_facet(Facet::Location, &tokens)?,
            by_participant: self.rank_facet(Facet::Participant, &tokens)?,
        })
    }

    /// Flat-map all tokens through one facet's matcher, then rank the
    /// concatenated candidates.
    fn rank_facet(
        &self,
        facet: Facet,
        tokens: &BTreeSet<String>,
    ) -> DenkmalResult<Vec<RankedHit>> {
        let mut candidates: Vec<Candidate> = Vec::new();
        for token in tokens {
            candidates.extend(match_field(&self.source, facet, token)?);
        }
        debug!(%facet, candidates = candidates.len(), "facet matched");
        Ok(rank(candidates))
    }
}
