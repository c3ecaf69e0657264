//! Weight totals over unclaimed parts
//!
//! Recomputed from scratch every iteration of the partition loop. Sums are
//! accumulated in inventory order so that a unit's total is bit-identical to
//! the weight the claimer later removes for it.

use crate::category::CategoryIndex;
use crate::claim::UnclaimedSet;
use crate::error::{DivideError, Result};
use crate::part::Part;
use crate::unit::SuperCategoryStandard;
use indexmap::IndexMap;

/// Totals of unclaimed weight at every granularity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregates {
    /// Super-category name → weight, in first-seen order
    pub by_super_category: IndexMap<String, f64>,
    /// (super-category, standard flag) → weight, in first-seen order
    pub by_super_category_standard: IndexMap<SuperCategoryStandard, f64>,
    /// Weight per category id, `0..=max_id`; zero when nothing is left
    pub by_category: Vec<f64>,
    /// Weight of all unclaimed parts
    pub grand_total: f64,
}

impl Aggregates {
    pub fn compute(
        parts: &[Part],
        unclaimed: &UnclaimedSet,
        categories: &CategoryIndex,
    ) -> Result<Self> {
        let table_len = categories.max_id().map_or(0, |id| id as usize + 1);
        let mut totals = Self {
            by_category: vec![0.0; table_len],
            ..Self::default()
        };

        for part in unclaimed.iter(parts) {
            if !categories.contains(part.category_id) {
                return Err(DivideError::UnknownCategory {
                    part: part.num.clone(),
                    category_id: part.category_id,
                });
            }

            *totals
                .by_super_category
                .entry(part.super_category.clone())
                .or_insert(0.0) += part.total_weight;

            let key = SuperCategoryStandard::new(part.super_category.clone(), part.standard);
            *totals.by_super_category_standard.entry(key).or_insert(0.0) += part.total_weight;

            totals.by_category[part.category_id as usize] += part.total_weight;
            totals.grand_total += part.total_weight;
        }

        Ok(totals)
    }

    /// Weight in a category, zero for ids outside the table
    pub fn category(&self, id: u32) -> f64 {
        self.by_category.get(id as usize).copied().unwrap_or(0.0)
    }
}
