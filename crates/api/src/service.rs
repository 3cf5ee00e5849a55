//! Monument catalog service
//!
//! Explicit service object: constructed once at startup and passed by
//! reference/handle to callers. There is no global access point; the
//! single-dataset-per-process semantics live in whoever owns the service,
//! not in hidden static state.

use crate::config::ServiceConfig;
use denkmal_core::{DenkmalResult, GeoBounds, Monument};
use denkmal_search::{SearchEngine, SearchHistory, SearchResults};
use denkmal_storage::Dataset;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Facade over the dataset, the search engine and the history log.
///
/// # Thread Safety
///
/// The dataset is immutable and shared via `Arc`; the search pipeline is
/// stateless. The only mutable state is the history log, which locks
/// internally. `&MonumentService` can be shared across threads freely.
#[derive(Debug)]
pub struct MonumentService {
    dataset: Arc<Dataset>,
    engine: SearchEngine<Arc<Dataset>>,
    history: SearchHistory,
}

impl MonumentService {
    /// Wrap an already-built dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        info!(monuments = dataset.len(), "monument service ready");
        MonumentService {
            engine: SearchEngine::new(Arc::clone(&dataset)),
            history: SearchHistory::new(),
            dataset,
        }
    }

    /// Load the seed dataset from a JSON file and build the service.
    pub fn open(path: impl AsRef<Path>) -> DenkmalResult<Self> {
        let dataset = Dataset::from_path(path)?;
        Ok(Self::new(Arc::new(dataset)))
    }

    /// Build the service from a parsed config.
    pub fn from_config(config: &ServiceConfig) -> DenkmalResult<Self> {
        Self::open(&config.dataset)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Run a ranked search across all facets.
    ///
    /// Does not touch the history log; recording a query is a separate,
    /// caller-driven operation.
    pub fn search(&self, query: &str) -> DenkmalResult<SearchResults> {
        self.engine.search(query)
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Append one entry to the search history log.
    pub fn record_history(&self, entry: impl Into<String>) {
        self.history.record(entry);
    }

    /// All history entries, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.entries()
    }

    // ========================================================================
    // Catalog queries
    // ========================================================================

    /// Monuments inside an inclusive geographic bounding box.
    pub fn monuments_in_bounds(&self, bounds: GeoBounds) -> DenkmalResult<Vec<Monument>> {
        self.dataset.monuments_in_bounds(bounds)
    }

    /// Earliest and latest era years across the catalog.
    pub fn era_year_extremes(&self) -> DenkmalResult<Option<(i32, i32)>> {
        self.dataset.era_year_extremes()
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
