//! Candidate selection
//!
//! Each iteration proposes the best unit at every granularity, then picks one
//! of those. "Best" means the smallest distance to the ideal share; on equal
//! distance the shorter display name wins, and on a full tie the candidate
//! seen first is kept.

use crate::aggregate::Aggregates;
use crate::category::CategoryIndex;
use crate::claim::UnclaimedSet;
use crate::part::Part;
use crate::unit::{Granularity, Unit, REMAINING_NAME};

/// A proposed unit together with its distance to the ideal share
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub unit: Unit,
    /// Display name, also used for tie-breaking
    pub name: String,
    /// Aggregate weight of the unit
    pub weight: f64,
    /// |ideal share - weight|
    pub delta: f64,
}

impl Candidate {
    pub fn new(unit: Unit, name: impl Into<String>, weight: f64, ideal_share: f64) -> Self {
        Self {
            unit,
            name: name.into(),
            weight,
            delta: (ideal_share - weight).abs(),
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.unit.granularity()
    }

    /// Strictly better: smaller delta, or equal delta and a shorter name
    pub fn beats(&self, other: &Candidate) -> bool {
        self.delta < other.delta
            || (self.delta == other.delta && self.name_len() < other.name_len())
    }

    fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

/// Keep the first candidate unless a later one strictly beats it
fn best_of(candidates: impl IntoIterator<Item = Candidate>) -> Option<Candidate> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(current) if !candidate.beats(&current) => Some(current),
        _ => Some(candidate),
    })
}

/// Closest single part, scanned in inventory order
pub fn best_part(parts: &[Part], unclaimed: &UnclaimedSet, ideal_share: f64) -> Option<Candidate> {
    best_of(
        unclaimed
            .iter(parts)
            .filter(|p| p.total_weight > 0.0)
            .map(|p| Candidate::new(Unit::Part(p.num.clone()), &p.name, p.total_weight, ideal_share)),
    )
}

/// Closest category, scanned by ascending id
pub fn best_category(
    totals: &Aggregates,
    categories: &CategoryIndex,
    ideal_share: f64,
) -> Option<Candidate> {
    best_of(
        totals
            .by_category
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight > 0.0)
            .map(|(id, &weight)| {
                let id = id as u32;
                Candidate::new(Unit::Category(id), categories.name(id), weight, ideal_share)
            }),
    )
}

pub fn best_super_category(totals: &Aggregates, ideal_share: f64) -> Option<Candidate> {
    best_of(
        totals
            .by_super_category
            .iter()
            .filter(|&(_, &weight)| weight > 0.0)
            .map(|(name, &weight)| {
                Candidate::new(Unit::SuperCategory(name.clone()), name, weight, ideal_share)
            }),
    )
}

pub fn best_super_category_standard(totals: &Aggregates, ideal_share: f64) -> Option<Candidate> {
    best_of(
        totals
            .by_super_category_standard
            .iter()
            .filter(|&(_, &weight)| weight > 0.0)
            .map(|(key, &weight)| {
                Candidate::new(
                    Unit::SuperCategoryStandard(key.clone()),
                    key.to_string(),
                    weight,
                    ideal_share,
                )
            }),
    )
}

/// Everything left as one group; always available
pub fn remaining(totals: &Aggregates, ideal_share: f64) -> Candidate {
    Candidate::new(Unit::Remaining, REMAINING_NAME, totals.grand_total, ideal_share)
}

/// One candidate per granularity, in tie-break priority order
pub fn propose(
    parts: &[Part],
    unclaimed: &UnclaimedSet,
    totals: &Aggregates,
    categories: &CategoryIndex,
    ideal_share: f64,
) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(Granularity::PRIORITY.len());
    for granularity in Granularity::PRIORITY {
        let candidate = match granularity {
            Granularity::Remaining => Some(remaining(totals, ideal_share)),
            Granularity::SuperCategory => best_super_category(totals, ideal_share),
            Granularity::Category => best_category(totals, categories, ideal_share),
            Granularity::SuperCategoryStandard => {
                best_super_category_standard(totals, ideal_share)
            }
            Granularity::Part => best_part(parts, unclaimed, ideal_share),
        };
        candidates.extend(candidate);
    }
    candidates
}

/// Global pick across granularities
///
/// `candidates` must be in priority order (see [`propose`]).
pub fn pick_best(candidates: Vec<Candidate>) -> Option<Candidate> {
    best_of(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryInfo;
    use crate::unit::SuperCategoryStandard;

    fn candidate(name: &str, delta: f64) -> Candidate {
        Candidate {
            unit: Unit::SuperCategory(name.to_string()),
            name: name.to_string(),
            weight: 0.0,
            delta,
        }
    }

    #[test]
    fn test_beats_on_delta() {
        assert!(candidate("Longer name", 1.0).beats(&candidate("A", 2.0)));
        assert!(!candidate("A", 2.0).beats(&candidate("Longer name", 1.0)));
    }

    #[test]
    fn test_beats_on_name_length() {
        assert!(candidate("AB", 1.0).beats(&candidate("ABC", 1.0)));
        assert!(!candidate("ABC", 1.0).beats(&candidate("AB", 1.0)));
    }

    #[test]
    fn test_full_tie_keeps_first() {
        let best = best_of(vec![candidate("AA", 1.0), candidate("BB", 1.0)]).unwrap();
        assert_eq!(best.name, "AA");
    }

    #[test]
    fn test_name_length_counts_chars() {
        // "Ø" is two bytes but one character
        assert!(!candidate("ØØ", 1.0).beats(&candidate("AA", 1.0)));
    }

    #[test]
    fn test_best_of_empty() {
        assert!(best_of(Vec::new()).is_none());
    }

    fn categories() -> CategoryIndex {
        CategoryIndex::new(vec![
            CategoryInfo {
                id: 1,
                name: "Baseplates".to_string(),
                super_category: "Plates".to_string(),
                standard: true,
            },
            CategoryInfo {
                id: 2,
                name: "Plates".to_string(),
                super_category: "Plates".to_string(),
                standard: true,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_best_category_skips_empty_and_prefers_short_names() {
        let parts = vec![
            Part::new("3811", "Baseplate 32 x 32", 1, 10.0, 1, "Plates", true),
            Part::new("3020", "Plate 2 x 4", 10, 1.0, 2, "Plates", true),
        ];
        let set = UnclaimedSet::for_parts(&parts);
        let totals = Aggregates::compute(&parts, &set, &categories()).unwrap();
        let best = best_category(&totals, &categories(), 10.0).unwrap();
        assert_eq!(best.unit, Unit::Category(2));
        assert_eq!(best.name, "Plates");
        assert_eq!(best.delta, 0.0);
    }

    #[test]
    fn test_best_part_ignores_claimed_and_weightless() {
        let parts = vec![
            Part::new("a", "Exact", 1, 5.0, 1, "Plates", true),
            Part::new("b", "Sticker", 1, 0.0, 1, "Plates", true),
            Part::new("c", "Near", 1, 4.0, 1, "Plates", true),
        ];
        let mut set = UnclaimedSet::for_parts(&parts);
        set.claim_part(&parts, "a");
        let best = best_part(&parts, &set, 0.5).unwrap();
        assert_eq!(best.unit, Unit::Part("c".to_string()));
    }

    #[test]
    fn test_propose_is_in_priority_order() {
        let parts = vec![Part::new("3020", "Plate 2 x 4", 2, 1.0, 2, "Plates", true)];
        let set = UnclaimedSet::for_parts(&parts);
        let totals = Aggregates::compute(&parts, &set, &categories()).unwrap();
        let granularities: Vec<Granularity> = propose(&parts, &set, &totals, &categories(), 1.0)
            .iter()
            .map(Candidate::granularity)
            .collect();
        assert_eq!(granularities, Granularity::PRIORITY.to_vec());
    }

    #[test]
    fn test_pick_best_falls_back_to_priority() {
        let unit = Unit::SuperCategoryStandard(SuperCategoryStandard::new("AB", true));
        let candidates = vec![
            Candidate::new(Unit::SuperCategory("ABCDEFGHIJK".to_string()), "ABCDEFGHIJK", 5.0, 5.0),
            Candidate::new(Unit::Category(7), "ABCDEFGHIJK", 5.0, 5.0),
            Candidate::new(unit, "AB Standard", 5.0, 5.0),
        ];
        let best = pick_best(candidates).unwrap();
        assert_eq!(best.granularity(), Granularity::SuperCategory);
    }
}
