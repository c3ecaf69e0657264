//! Greedy balanced partitioning of a part inventory
//!
//! The ideal share is the starting grand total divided by the requested
//! number of divisions. Each iteration recomputes the unclaimed totals, takes
//! the unit closest to the ideal share and claims it as one grouping, until
//! nothing is left. The number of groupings is not guaranteed to equal the
//! requested division count.

use crate::aggregate::Aggregates;
use crate::category::CategoryIndex;
use crate::claim::UnclaimedSet;
use crate::error::{DivideError, Result};
use crate::part::Part;
use crate::select::{pick_best, propose};
use crate::unit::{Granularity, Unit};
use tracing::{debug, info};

/// One claimed group of parts
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    pub unit: Unit,
    /// Display name of the unit
    pub name: String,
    /// Weight claimed by this step (grams)
    pub weight: f64,
    /// Indices of the claimed parts, in inventory order
    pub parts: Vec<usize>,
}

impl Grouping {
    pub fn granularity(&self) -> Granularity {
        self.unit.granularity()
    }
}

/// Result of a partition run
#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    /// Weight of the whole inventory
    pub grand_total: f64,
    /// Target weight per division
    pub ideal_share: f64,
    /// Groupings in claim order
    pub groupings: Vec<Grouping>,
}

impl Division {
    /// Sum of weights over all groupings
    pub fn assigned_weight(&self) -> f64 {
        self.groupings.iter().map(|g| g.weight).sum()
    }
}

/// Partition `parts` into groupings close to `grand_total / divisions` each
///
/// # Errors
///
/// - [`DivideError::InvalidDivisionCount`] when `divisions` is zero
/// - [`DivideError::UnknownCategory`] when a part's category is not indexed
///
/// No partial result is returned on error.
pub fn divide_parts(parts: &[Part], categories: &CategoryIndex, divisions: u32) -> Result<Division> {
    if divisions == 0 {
        return Err(DivideError::InvalidDivisionCount);
    }

    if let Some(part) = parts.iter().find(|p| !categories.contains(p.category_id)) {
        return Err(DivideError::UnknownCategory {
            part: part.num.clone(),
            category_id: part.category_id,
        });
    }

    let mut unclaimed = UnclaimedSet::for_parts(parts);
    let grand_total = unclaimed.weight(parts);
    let ideal_share = grand_total / f64::from(divisions);
    info!(
        parts = parts.len(),
        grand_total, ideal_share, divisions, "Dividing parts"
    );

    let mut groupings: Vec<Grouping> = Vec::new();
    loop {
        let totals = Aggregates::compute(parts, &unclaimed, categories)?;
        if totals.grand_total <= 0.0 {
            break;
        }

        let candidates = propose(parts, &unclaimed, &totals, categories, ideal_share);
        for candidate in &candidates {
            debug!(
                granularity = %candidate.granularity(),
                name = %candidate.name,
                weight = candidate.weight,
                delta = candidate.delta,
                "Candidate"
            );
        }

        // The remaining candidate is always proposed, so there is a best one,
        // and every proposed candidate carries positive weight
        let Some(best) = pick_best(candidates) else {
            break;
        };

        let claim = unclaimed.claim(parts, &best.unit);
        debug!(
            granularity = %best.granularity(),
            name = %best.name,
            weight = claim.weight,
            claimed = claim.parts.len(),
            left = unclaimed.len(),
            "Claimed"
        );

        groupings.push(Grouping {
            unit: best.unit,
            name: best.name,
            weight: claim.weight,
            parts: claim.parts,
        });
    }

    // Weightless leftovers ride along with the last grouping
    if let Some(last) = groupings.last_mut() {
        let leftover = unclaimed.claim_remaining(parts);
        if !leftover.is_empty() {
            debug!(parts = leftover.parts.len(), name = %last.name, "Attached weightless parts");
            last.parts.extend(leftover.parts);
            last.parts.sort_unstable();
        }
    }

    info!(groupings = groupings.len(), "Division complete");
    Ok(Division {
        grand_total,
        ideal_share,
        groupings,
    })
}
