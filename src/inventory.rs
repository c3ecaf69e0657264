//! Set inventory ingestion
//!
//! Reads Rebrickable set-parts pages, resolves each entry to a weighted
//! [`Part`] and merges duplicate records.
//!
//! Page format:
//! ```json
//! {"next": null, "results": [{"quantity": 4, "part": {"part_num": "3001",
//!   "name": "Brick 2 x 4", "part_cat_id": 11,
//!   "external_ids": {"BrickLink": ["3001"]}}}]}
//! ```

use crate::category::CategoryIndex;
use crate::error::IngestError;
use crate::part::Part;
use crate::weight::WeightSource;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Part metadata inside an inventory entry
#[derive(Debug, Clone, Deserialize)]
pub struct PartRecord {
    pub part_num: String,
    pub name: String,
    pub part_cat_id: u32,
    #[serde(default)]
    pub external_ids: HashMap<String, Vec<String>>,
}

impl PartRecord {
    /// Id used for weight lookups
    ///
    /// The last BrickLink id is usually the current one; parts without one
    /// fall back to the Rebrickable number.
    pub fn bricklink_id(&self) -> &str {
        self.external_ids
            .get("BrickLink")
            .and_then(|ids| ids.last())
            .map_or(self.part_num.as_str(), String::as_str)
    }
}

/// One line of a set inventory
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryEntry {
    pub quantity: u32,
    pub part: PartRecord,
}

/// One page of a paginated set inventory
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryPage {
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<InventoryEntry>,
}

impl InventoryPage {
    pub fn from_json_str(content: &str) -> std::result::Result<Self, IngestError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory page: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid inventory page: {}", path.display()))
    }
}

/// Resolve inventory entries into weighted parts
pub fn build_parts<'a, W>(
    pages: impl IntoIterator<Item = &'a InventoryPage>,
    categories: &CategoryIndex,
    weights: &mut W,
) -> std::result::Result<Vec<Part>, IngestError>
where
    W: WeightSource + ?Sized,
{
    let mut parts = Vec::new();
    for page in pages {
        for entry in &page.results {
            let record = &entry.part;
            let category = categories.get(record.part_cat_id).ok_or_else(|| {
                IngestError::UnknownCategory {
                    part: record.part_num.clone(),
                    category_id: record.part_cat_id,
                }
            })?;
            let unit_weight = weights.unit_weight(record.bricklink_id())?;
            debug!(
                part = %record.part_num,
                bricklink = %record.bricklink_id(),
                quantity = entry.quantity,
                unit_weight,
                "Resolved part"
            );
            parts.push(Part::new(
                record.part_num.clone(),
                record.name.clone(),
                entry.quantity,
                unit_weight,
                record.part_cat_id,
                category.super_category.clone(),
                category.standard,
            ));
        }
    }
    Ok(parts)
}

/// Set details in Rebrickable's set format; only the fields the report uses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetInfo {
    pub set_num: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl SetInfo {
    /// Details for a set known only by number
    pub fn bare(set_num: impl Into<String>) -> Self {
        Self {
            set_num: set_num.into(),
            name: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read set info: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid set info: {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse set info JSON")
    }
}

/// Merge records sharing a part number
///
/// Records are walked from the end of the inventory. The last occurrence of
/// each number survives, with earlier duplicates folded into it in inventory
/// order, so the result lists parts in reverse order of their last
/// occurrence.
pub fn dedup_parts(parts: Vec<Part>) -> Vec<Part> {
    let mut merged: IndexMap<String, (Part, Vec<Part>)> = IndexMap::with_capacity(parts.len());
    for part in parts.into_iter().rev() {
        match merged.get_mut(&part.num) {
            Some((_, earlier)) => earlier.push(part),
            None => {
                merged.insert(part.num.clone(), (part, Vec::new()));
            }
        }
    }
    merged
        .into_values()
        .map(|(mut kept, earlier)| {
            for dup in earlier.iter().rev() {
                kept.merge(dup);
            }
            kept
        })
        .collect()
}

/// Stable sort by ascending total weight
pub fn sort_by_weight(parts: &mut [Part]) {
    parts.sort_by(|a, b| a.total_weight.total_cmp(&b.total_weight));
}
