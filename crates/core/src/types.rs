//! Domain types for the monument catalog
//!
//! Everything here is an immutable snapshot: monuments are fetched from the
//! dataset at query time, carried through the search pipeline by value, and
//! have no lifecycle beyond the call that produced them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable primary key of a monument.
///
/// Ranking groups candidates by this key. The display name is NOT identity:
/// two distinct monuments may share a name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MonumentId(pub u32);

impl MonumentId {
    /// Raw id value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MonumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time period a monument is attributed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Era {
    /// Period name, e.g. "Klassizismus".
    pub name: String,
    /// First year of the period (inclusive).
    pub year_from: i32,
    /// Last year of the period (inclusive).
    pub year_to: i32,
}

/// Resolved location of a monument.
///
/// The street string is the field the location facet of the search matches
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Street and house number, e.g. "Pariser Platz 1".
    pub street: String,
    /// District name, resolved through the district table.
    pub district: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Immutable monument snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monument {
    /// Primary key; grouping identity for ranking.
    pub id: MonumentId,
    /// Display name, e.g. "Brandenburger Tor".
    pub name: String,
    /// Kind of monument, e.g. "Baudenkmal".
    pub kind: String,
    /// Attributed time period, if the dataset records one.
    pub era: Option<Era>,
    /// Resolved address.
    pub address: Address,
}

/// Inclusive geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl GeoBounds {
    /// Whether a coordinate falls inside the box. Both edges are inclusive.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }
}
