//! Public surface for the denkmal monument catalog.
//!
//! This crate re-exports the workspace's public types behind one import
//! path. Most callers only need [`MonumentService`]:
//!
//! ```
//! use denkmal::{Dataset, MonumentService};
//! use std::sync::Arc;
//!
//! let seed = r#"{
//!     "monuments": [{"id": 1, "name": "Brandenburger Tor",
//!                    "kind_id": 1, "location_id": 1}],
//!     "locations": [{"id": 1, "street": "Pariser Platz", "district_id": 1,
//!                    "latitude": 52.5163, "longitude": 13.3777}],
//!     "districts": [{"id": 1, "name": "Mitte"}],
//!     "kinds": [{"id": 1, "name": "Baudenkmal"}]
//! }"#;
//! let service = MonumentService::new(Arc::new(Dataset::from_json(seed).unwrap()));
//! let results = service.search("tor").unwrap();
//! assert_eq!(results.by_name.len(), 1);
//! ```

// ============================================================================
// Service facade and configuration
// ============================================================================

pub use denkmal_api::{MonumentService, ServiceConfig};

// ============================================================================
// Domain types
// ============================================================================

pub use denkmal_core::{Address, DenkmalError, DenkmalResult, Era, GeoBounds, Monument, MonumentId};

// ============================================================================
// Search types
// ============================================================================

pub use denkmal_search::{Facet, RankedHit, SearchResults};

// ============================================================================
// Storage
// ============================================================================

pub use denkmal_storage::{Dataset, SeedData};
