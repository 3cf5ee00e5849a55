//! Seed rows mirroring the relational schema
//!
//! The dataset ships as one JSON document holding the raw tables. Rows are
//! plain serde structs; all joins are by integer id and resolved when the
//! [`Dataset`](crate::Dataset) is built.

use denkmal_core::{DenkmalError, DenkmalResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Row of the monument table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonumentRow {
    pub id: u32,
    pub name: String,
    pub kind_id: u32,
    pub location_id: u32,
    /// Monuments without a recorded time period carry no era id.
    #[serde(default)]
    pub era_id: Option<u32>,
}

/// Row of the location table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRow {
    pub id: u32,
    pub street: String,
    pub district_id: u32,
    pub latitude: f64,
    pub longitude: f64,
}

/// Row of the district table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRow {
    pub id: u32,
    pub name: String,
}

/// Row of the monument-kind table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindRow {
    pub id: u32,
    pub name: String,
}

/// Row of the era table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraRow {
    pub id: u32,
    pub name: String,
    pub year_from: i32,
    pub year_to: i32,
}

/// Row of the participant table (architects, sculptors, builders).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRow {
    pub id: u32,
    pub name: String,
}

/// Row of the monument↔participant join table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationRow {
    pub monument_id: u32,
    pub participant_id: u32,
}

/// Raw tables as loaded from the seed file.
///
/// Every table defaults to empty so partial fixtures stay terse in tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub monuments: Vec<MonumentRow>,
    #[serde(default)]
    pub locations: Vec<LocationRow>,
    #[serde(default)]
    pub districts: Vec<DistrictRow>,
    #[serde(default)]
    pub kinds: Vec<KindRow>,
    #[serde(default)]
    pub eras: Vec<EraRow>,
    #[serde(default)]
    pub participants: Vec<ParticipantRow>,
    #[serde(default)]
    pub participations: Vec<ParticipationRow>,
}

impl SeedData {
    /// Parse seed tables from a JSON string.
    pub fn from_json(json: &str) -> DenkmalResult<Self> {
        serde_json::from_str(json).map_err(|e| DenkmalError::MalformedDataset(e.to_string()))
    }

    /// Read and parse a seed file.
    pub fn from_path(path: impl AsRef<Path>) -> DenkmalResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
