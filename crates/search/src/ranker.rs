//! Aggregation and ranking of candidate matches
//!
//! Called once per facet per query with the concatenation of all per-token
//! candidate lists. Groups by monument primary key, sums scores within each
//! group, and sorts descending by aggregate score.
//!
//! # Determinism
//!
//! The sort is stable and the grouping preserves first-appearance order, so
//! ties between monuments keep the order in which they first showed up in
//! the candidate stream. Given a deterministic candidate order (tokens in
//! set order, storage scans in table order), ranking is fully deterministic.

use crate::matcher::Candidate;
use denkmal_core::{Monument, MonumentId};
use serde::Serialize;
use std::collections::HashMap;

/// One entry of a facet's ranked result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHit {
    /// Sum of this monument's candidate scores across all tokens.
    pub score: f64,
    pub monument: Monument,
}

/// Group candidates by monument id, sum their scores, and sort descending.
///
/// Every monument with at least one candidate appears exactly once in the
/// output; the carried snapshot is the group's first occurrence. Scores are
/// compared with `total_cmp`, so the sort cannot panic on pathological
/// values.
pub fn rank(candidates: Vec<Candidate>) -> Vec<RankedHit> {
    let mut hits: Vec<RankedHit> = Vec::new();
    let mut positions: HashMap<MonumentId, usize> = HashMap::new();

    for candidate in candidates {
        match positions.get(&candidate.monument.id) {
            Some(&pos) => hits[pos].score += candidate.score,
            None => {
                positions.insert(candidate.monument.id, hits.len());
                hits.push(RankedHit {
                    score: candidate.score,
                    monument: candidate.monument,
                });
            }
        }
    }

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::monument;
    use proptest::prelude::*;

    fn candidate(score: f64, id: u32) -> Candidate {
        Candidate {
            score,
            monument: monument(id, &format!("Denkmal {id}")),
        }
    }

    #[test]
    fn test_rank_sums_scores_per_monument() {
        // A appears twice (0.3 + 0.5), B once (0.8).
        let hits = rank(vec![candidate(0.3, 1), candidate(0.5, 1), candidate(0.8, 2)]);
        assert_eq!(hits.len(), 2);
        // Tie at 0.8: A first appeared first, stable sort keeps it ahead.
        assert_eq!(hits[0].monument.id.value(), 1);
        assert!((hits[0].score - 0.8).abs() < 1e-12);
        assert_eq!(hits[1].monument.id.value(), 2);
        assert!((hits[1].score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_rank_sorts_descending() {
        let hits = rank(vec![candidate(0.2, 1), candidate(0.9, 2), candidate(0.5, 3)]);
        let ids: Vec<_> = hits.iter().map(|h| h.monument.id.value()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank(vec![]).is_empty());
    }

    #[test]
    fn test_rank_keeps_first_snapshot() {
        // Same id under two names (storage handed back different field
        // contexts); the first occurrence is the representative.
        let first = Candidate {
            score: 0.4,
            monument: monument(1, "Erstes"),
        };
        let second = Candidate {
            score: 0.1,
            monument: monument(1, "Zweites"),
        };
        let hits = rank(vec![first, second]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].monument.name, "Erstes");
        assert!((hits[0].score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_distinct_monuments_sharing_a_name_stay_distinct() {
        // Grouping is by id, not display name.
        let a = Candidate {
            score: 0.4,
            monument: monument(1, "Stadtmauer"),
        };
        let b = Candidate {
            score: 0.2,
            monument: monument(2, "Stadtmauer"),
        };
        let hits = rank(vec![a, b]);
        assert_eq!(hits.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_sorted_descending(
            scores in proptest::collection::vec((0u32..20, 0.0f64..1.0), 0..40)
        ) {
            let candidates = scores
                .iter()
                .map(|(id, score)| candidate(*score, *id))
                .collect();
            let hits = rank(candidates);
            for pair in hits.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }

        #[test]
        fn prop_sum_preserved_and_no_spurious_entries(
            scores in proptest::collection::vec((0u32..20, 0.0f64..1.0), 0..40)
        ) {
            let candidates: Vec<Candidate> = scores
                .iter()
                .map(|(id, score)| candidate(*score, *id))
                .collect();
            let hits = rank(candidates.clone());

            // Exactly one entry per distinct input id.
            let mut expected: std::collections::HashMap<u32, f64> =
                std::collections::HashMap::new();
            for c in &candidates {
                *expected.entry(c.monument.id.value()).or_insert(0.0) += c.score;
            }
            prop_assert_eq!(hits.len(), expected.len());
            for hit in &hits {
                let want = expected[&hit.monument.id.value()];
                prop_assert!((hit.score - want).abs() < 1e-9);
            }
        }
    }
}
