//! In-memory fakes shared by the unit tests in this crate.

use crate::matcher::{Facet, FacetSource};
use denkmal_core::{Address, DenkmalError, DenkmalResult, Monument, MonumentId};
use denkmal_storage::FieldMatch;

/// Build a monument snapshot with a fixed address.
pub(crate) fn monument(id: u32, name: &str) -> Monument {
    monument_at(id, name, "Unter den Linden")
}

/// Build a monument snapshot with an explicit street.
pub(crate) fn monument_at(id: u32, name: &str, street: &str) -> Monument {
    Monument {
        id: MonumentId(id),
        name: name.to_string(),
        kind: "Baudenkmal".to_string(),
        era: None,
        address: Address {
            street: street.to_string(),
            district: "Mitte".to_string(),
            latitude: 52.5,
            longitude: 13.4,
        },
    }
}

/// Fake [`FacetSource`] backed by plain vectors.
///
/// Name and location facets scan the monuments themselves; the participant
/// facet scans `(monument_index, participant_name)` pairs so tests can model
/// the join table.
pub(crate) struct StaticSource {
    monuments: Vec<Monument>,
    participants: Vec<(usize, String)>,
    fail: bool,
}

impl StaticSource {
    pub(crate) fn new(monuments: Vec<Monument>) -> Self {
        StaticSource {
            monuments,
            participants: Vec::new(),
            fail: false,
        }
    }

    pub(crate) fn with_participants(mut self, participants: Vec<(usize, &str)>) -> Self {
        self.participants = participants
            .into_iter()
            .map(|(idx, name)| (idx, name.to_string()))
            .collect();
        self
    }

    /// A source whose every query fails like corrupted storage.
    pub(crate) fn failing() -> Self {
        StaticSource {
            monuments: Vec::new(),
            participants: Vec::new(),
            fail: true,
        }
    }
}

impl FacetSource for StaticSource {
    fn field_matches(&self, facet: Facet, needle: &str) -> DenkmalResult<Vec<FieldMatch>> {
        if self.fail {
            return Err(DenkmalError::DanglingReference {
                relation: "location",
                id: 0,
            });
        }
        let folded = needle.to_lowercase();
        let matches = match facet {
            Facet::Name => self
                .monuments
                .iter()
                .filter(|m| m.name.to_lowercase().contains(&folded))
                .map(|m| FieldMatch {
                    monument: m.clone(),
                    field: m.name.clone(),
                })
                .collect(),
            Facet::Location => self
                .monuments
                .iter()
                .filter(|m| m.address.street.to_lowercase().contains(&folded))
                .map(|m| FieldMatch {
                    monument: m.clone(),
                    field: m.address.street.clone(),
                })
                .collect(),
            Facet::Participant => self
                .participants
                .iter()
                .filter(|(_, name)| name.to_lowercase().contains(&folded))
                .map(|(idx, name)| FieldMatch {
                    monument: self.monuments[*idx].clone(),
                    field: name.clone(),
                })
                .collect(),
        };
        Ok(matches)
    }
}
