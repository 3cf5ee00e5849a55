//! Immutable in-memory dataset with join resolution
//!
//! The dataset is loaded once at process start and never mutated afterwards.
//! Queries are linear scans in table insertion order; that order is what the
//! search ranker's tie-break ultimately inherits, so scans must stay
//! deterministic.
//!
//! # Integrity
//!
//! Referential integrity (monument → location → district, monument → kind,
//! monument → era, participation → both sides) is validated once in
//! [`Dataset::from_seed`]. Joins at query time still return errors instead of
//! panicking; a dangling id past construction means the tables were corrupted
//! and surfaces as [`DenkmalError::DanglingReference`].

use crate::rows::{
    DistrictRow, EraRow, KindRow, LocationRow, MonumentRow, ParticipantRow, ParticipationRow,
    SeedData,
};
use denkmal_core::{Address, DenkmalError, DenkmalResult, Era, GeoBounds, Monument, MonumentId};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// A monument snapshot paired with the text of the field a substring query
/// matched against.
///
/// The search scorer rates the matched field value, not the whole monument,
/// so queries hand both back together.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub monument: Monument,
    /// The matched column value: monument name, street, or participant name.
    pub field: String,
}

/// Read-only relational dataset.
///
/// # Thread Safety
///
/// `Dataset` is immutable after construction. Share it via `Arc`; concurrent
/// readers need no locking.
#[derive(Debug)]
pub struct Dataset {
    monuments: Vec<MonumentRow>,
    monument_index: HashMap<u32, usize>,
    locations: HashMap<u32, LocationRow>,
    districts: HashMap<u32, DistrictRow>,
    kinds: HashMap<u32, KindRow>,
    eras: HashMap<u32, EraRow>,
    participants: HashMap<u32, ParticipantRow>,
    participations: Vec<ParticipationRow>,
}

impl Dataset {
    /// Build the dataset from raw seed tables, validating referential
    /// integrity.
    pub fn from_seed(seed: SeedData) -> DenkmalResult<Self> {
        let locations: HashMap<u32, LocationRow> =
            seed.locations.into_iter().map(|r| (r.id, r)).collect();
        let districts: HashMap<u32, DistrictRow> =
            seed.districts.into_iter().map(|r| (r.id, r)).collect();
        let kinds: HashMap<u32, KindRow> = seed.kinds.into_iter().map(|r| (r.id, r)).collect();
        let eras: HashMap<u32, EraRow> = seed.eras.into_iter().map(|r| (r.id, r)).collect();
        let participants: HashMap<u32, ParticipantRow> =
            seed.participants.into_iter().map(|r| (r.id, r)).collect();

        let mut monument_index = HashMap::with_capacity(seed.monuments.len());
        for (pos, row) in seed.monuments.iter().enumerate() {
            if monument_index.insert(row.id, pos).is_some() {
                return Err(DenkmalError::MalformedDataset(format!(
                    "duplicate monument id {}",
                    row.id
                )));
            }
        }

        let dataset = Dataset {
            monuments: seed.monuments,
            monument_index,
            locations,
            districts,
            kinds,
            eras,
            participants,
            participations: seed.participations,
        };
        dataset.validate()?;

        info!(
            monuments = dataset.monuments.len(),
            locations = dataset.locations.len(),
            participants = dataset.participants.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse seed tables from a JSON string and build the dataset.
    pub fn from_json(json: &str) -> DenkmalResult<Self> {
        Self::from_seed(SeedData::from_json(json)?)
    }

    /// Read a seed file and build the dataset.
    pub fn from_path(path: impl AsRef<Path>) -> DenkmalResult<Self> {
        Self::from_seed(SeedData::from_path(path)?)
    }

    fn validate(&self) -> DenkmalResult<()> {
        for row in &self.monuments {
            let location = self.locations.get(&row.location_id).ok_or_else(|| {
                DenkmalError::MalformedDataset(format!(
                    "monument {} references missing location {}",
                    row.id, row.location_id
                ))
            })?;
            if !self.districts.contains_key(&location.district_id) {
                return Err(DenkmalError::MalformedDataset(format!(
                    "location {} references missing district {}",
                    location.id, location.district_id
                )));
            }
            if !self.kinds.contains_key(&row.kind_id) {
                return Err(DenkmalError::MalformedDataset(format!(
                    "monument {} references missing kind {}",
                    row.id, row.kind_id
                )));
            }
            if let Some(era_id) = row.era_id {
                if !self.eras.contains_key(&era_id) {
                    return Err(DenkmalError::MalformedDataset(format!(
                        "monument {} references missing era {}",
                        row.id, era_id
                    )));
                }
            }
        }
        for link in &self.participations {
            if !self.monument_index.contains_key(&link.monument_id) {
                return Err(DenkmalError::MalformedDataset(format!(
                    "participation references missing monument {}",
                    link.monument_id
                )));
            }
            if !self.participants.contains_key(&link.participant_id) {
                return Err(DenkmalError::MalformedDataset(format!(
                    "participation references missing participant {}",
                    link.participant_id
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Row-to-entity mapping
    // ========================================================================

    /// Resolve one monument row into a typed snapshot, joining location,
    /// district, kind and era.
    fn snapshot(&self, row: &MonumentRow) -> DenkmalResult<Monument> {
        let location =
            self.locations
                .get(&row.location_id)
                .ok_or(DenkmalError::DanglingReference {
                    relation: "location",
                    id: row.location_id,
                })?;
        let district =
            self.districts
                .get(&location.district_id)
                .ok_or(DenkmalError::DanglingReference {
                    relation: "district",
                    id: location.district_id,
                })?;
        let kind = self
            .kinds
            .get(&row.kind_id)
            .ok_or(DenkmalError::DanglingReference {
                relation: "kind",
                id: row.kind_id,
            })?;
        let era = match row.era_id {
            Some(era_id) => {
                let era = self
                    .eras
                    .get(&era_id)
                    .ok_or(DenkmalError::DanglingReference {
                        relation: "era",
                        id: era_id,
                    })?;
                Some(Era {
                    name: era.name.clone(),
                    year_from: era.year_from,
                    year_to: era.year_to,
                })
            }
            None => None,
        };

        Ok(Monument {
            id: MonumentId(row.id),
            name: row.name.clone(),
            kind: kind.name.clone(),
            era,
            address: Address {
                street: location.street.clone(),
                district: district.name.clone(),
                latitude: location.latitude,
                longitude: location.longitude,
            },
        })
    }

    // ========================================================================
    // Substring queries (search facets)
    // ========================================================================

    /// Monuments whose name contains `needle`, case-insensitively.
    ///
    /// Results come back in table insertion order; ordering is imposed later
    /// by the ranker.
    pub fn monuments_with_name_containing(&self, needle: &str) -> DenkmalResult<Vec<FieldMatch>> {
        let folded = needle.to_lowercase();
        let mut matches = Vec::new();
        for row in &self.monuments {
            if row.name.to_lowercase().contains(&folded) {
                matches.push(FieldMatch {
                    monument: self.snapshot(row)?,
                    field: row.name.clone(),
                });
            }
        }
        debug!(needle, hits = matches.len(), "name scan");
        Ok(matches)
    }

    /// Monuments whose street (joined via location) contains `needle`,
    /// case-insensitively.
    pub fn monuments_with_street_containing(&self, needle: &str) -> DenkmalResult<Vec<FieldMatch>> {
        let folded = needle.to_lowercase();
        let mut matches = Vec::new();
        for row in &self.monuments {
            let location =
                self.locations
                    .get(&row.location_id)
                    .ok_or(DenkmalError::DanglingReference {
                        relation: "location",
                        id: row.location_id,
                    })?;
            if location.street.to_lowercase().contains(&folded) {
                matches.push(FieldMatch {
                    monument: self.snapshot(row)?,
                    field: location.street.clone(),
                });
            }
        }
        debug!(needle, hits = matches.len(), "street scan");
        Ok(matches)
    }

    /// Monuments with a participant whose name contains `needle`,
    /// case-insensitively.
    ///
    /// Joined through the participation table; a monument appears once per
    /// matching participant, so a monument built by two matching sculptors
    /// yields two entries. The ranker later merges them by id.
    pub fn monuments_with_participant_containing(
        &self,
        needle: &str,
    ) -> DenkmalResult<Vec<FieldMatch>> {
        let folded = needle.to_lowercase();
        let mut matches = Vec::new();
        for link in &self.participations {
            let participant =
                self.participants
                    .get(&link.participant_id)
                    .ok_or(DenkmalError::DanglingReference {
                        relation: "participant",
                        id: link.participant_id,
                    })?;
            if !participant.name.to_lowercase().contains(&folded) {
                continue;
            }
            let pos =
                self.monument_index
                    .get(&link.monument_id)
                    .ok_or(DenkmalError::DanglingReference {
                        relation: "monument",
                        id: link.monument_id,
                    })?;
            matches.push(FieldMatch {
                monument: self.snapshot(&self.monuments[*pos])?,
                field: participant.name.clone(),
            });
        }
        debug!(needle, hits = matches.len(), "participant scan");
        Ok(matches)
    }

    // ========================================================================
    // Geographic and aggregate queries
    // ========================================================================

    /// Monuments whose location falls inside the bounding box (inclusive
    /// edges), in table insertion order.
    pub fn monuments_in_bounds(&self, bounds: GeoBounds) -> DenkmalResult<Vec<Monument>> {
        let mut inside = Vec::new();
        for row in &self.monuments {
            let location =
                self.locations
                    .get(&row.location_id)
                    .ok_or(DenkmalError::DanglingReference {
                        relation: "location",
                        id: row.location_id,
                    })?;
            if bounds.contains(location.latitude, location.longitude) {
                inside.push(self.snapshot(row)?);
            }
        }
        debug!(hits = inside.len(), "bounds scan");
        Ok(inside)
    }

    /// Earliest `year_from` and latest `year_to` across monuments that carry
    /// an era. `None` when no monument has one.
    pub fn era_year_extremes(&self) -> DenkmalResult<Option<(i32, i32)>> {
        let mut extremes: Option<(i32, i32)> = None;
        for row in &self.monuments {
            let Some(era_id) = row.era_id else { continue };
            let era = self
                .eras
                .get(&era_id)
                .ok_or(DenkmalError::DanglingReference {
                    relation: "era",
                    id: era_id,
                })?;
            extremes = Some(match extremes {
                None => (era.year_from, era.year_to),
                Some((min, max)) => (min.min(era.year_from), max.max(era.year_to)),
            });
        }
        Ok(extremes)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Look up one monument by primary key.
    pub fn monument(&self, id: MonumentId) -> DenkmalResult<Option<Monument>> {
        match self.monument_index.get(&id.0) {
            Some(pos) => Ok(Some(self.snapshot(&self.monuments[*pos])?)),
            None => Ok(None),
        }
    }

    /// Number of monuments in the dataset.
    pub fn len(&self) -> usize {
        self.monuments.len()
    }

    /// Whether the dataset holds no monuments.
    pub fn is_empty(&self) -> bool {
        self.monuments.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
