//! Weighted, categorized inventory parts

use serde::{Deserialize, Serialize};

/// One inventory record after weight resolution and deduplication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Part number (e.g. "3001")
    pub num: String,
    /// Display name
    pub name: String,
    /// Number of copies in the kit
    pub quantity: u32,
    /// Weight of all copies in grams (quantity × unit weight)
    pub total_weight: f64,
    /// Category identifier
    pub category_id: u32,
    /// Super-category name (e.g. "Bricks", "Technic")
    pub super_category: String,
    /// Whether the category holds standard parts
    pub standard: bool,
}

impl Part {
    /// Create a part from its per-unit weight
    pub fn new(
        num: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        unit_weight: f64,
        category_id: u32,
        super_category: impl Into<String>,
        standard: bool,
    ) -> Self {
        Self {
            num: num.into(),
            name: name.into(),
            quantity,
            total_weight: f64::from(quantity) * unit_weight,
            category_id,
            super_category: super_category.into(),
            standard,
        }
    }

    /// Absorb a duplicate record of the same part
    pub fn merge(&mut self, other: &Part) {
        self.quantity += other.quantity;
        self.total_weight += other.total_weight;
    }
}

/// Sum of total weight over the given parts
pub fn total_weight<'a>(parts: impl IntoIterator<Item = &'a Part>) -> f64 {
    parts.into_iter().map(|p| p.total_weight).sum()
}
