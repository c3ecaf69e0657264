//! Claiming units of parts
//!
//! A partition run tracks the parts that still have to be assigned as an
//! ordered set of indices into the part slice. Claiming a unit removes the
//! matching indices; the set only ever shrinks.

use crate::error::Result;
use crate::part::Part;
use crate::unit::{SuperCategoryStandard, Unit};

/// Parts removed from the unclaimed set by one claim
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claim {
    /// Total weight of the claimed parts
    pub weight: f64,
    /// Indices of the claimed parts, in inventory order
    pub parts: Vec<usize>,
}

impl Claim {
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Indices of parts not yet assigned to a grouping
///
/// Every index must be valid for the part slice the set was created for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnclaimedSet {
    indices: Vec<usize>,
}

impl UnclaimedSet {
    /// All parts of the slice start out unclaimed
    pub fn for_parts(parts: &[Part]) -> Self {
        Self {
            indices: (0..parts.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Unclaimed parts in inventory order
    pub fn iter<'a>(&'a self, parts: &'a [Part]) -> impl Iterator<Item = &'a Part> + 'a {
        self.indices.iter().map(move |&i| &parts[i])
    }

    /// Weight of everything still unclaimed
    pub fn weight(&self, parts: &[Part]) -> f64 {
        self.iter(parts).map(|p| p.total_weight).sum()
    }

    fn claim_where<F>(&mut self, parts: &[Part], matches: F) -> Claim
    where
        F: Fn(&Part) -> bool,
    {
        let mut claim = Claim::default();
        self.indices.retain(|&i| {
            let part = &parts[i];
            if matches(part) {
                claim.weight += part.total_weight;
                claim.parts.push(i);
                false
            } else {
                true
            }
        });
        claim
    }

    /// Claim every unclaimed copy of a part number
    pub fn claim_part(&mut self, parts: &[Part], num: &str) -> Claim {
        self.claim_where(parts, |p| p.num == num)
    }

    pub fn claim_category(&mut self, parts: &[Part], category_id: u32) -> Claim {
        self.claim_where(parts, |p| p.category_id == category_id)
    }

    pub fn claim_super_category(&mut self, parts: &[Part], super_category: &str) -> Claim {
        self.claim_where(parts, |p| p.super_category == super_category)
    }

    /// Claim by composite key such as "Technic Non-Standard"
    pub fn claim_super_category_standard(&mut self, parts: &[Part], key: &str) -> Result<Claim> {
        let key: SuperCategoryStandard = key.parse()?;
        Ok(self.claim_super_category_key(parts, &key))
    }

    pub fn claim_super_category_key(
        &mut self,
        parts: &[Part],
        key: &SuperCategoryStandard,
    ) -> Claim {
        self.claim_where(parts, |p| {
            p.super_category == key.super_category && p.standard == key.standard
        })
    }

    /// Claim everything that is left
    pub fn claim_remaining(&mut self, parts: &[Part]) -> Claim {
        self.claim_where(parts, |_| true)
    }

    /// Claim the parts of a unit
    pub fn claim(&mut self, parts: &[Part], unit: &Unit) -> Claim {
        match unit {
            Unit::Remaining => self.claim_remaining(parts),
            Unit::SuperCategory(name) => self.claim_super_category(parts, name),
            Unit::Category(id) => self.claim_category(parts, *id),
            Unit::SuperCategoryStandard(key) => self.claim_super_category_key(parts, key),
            Unit::Part(num) => self.claim_part(parts, num),
        }
    }
}
