//! Category metadata lookup
//!
//! Loads the Rebrickable part-category dataset:
//! `{"results": [{"id": 11, "name": "Bricks", "super": "Bricks", "standard": true}, ...]}`

use crate::error::IngestError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Metadata for a single part category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: u32,
    pub name: String,
    #[serde(rename = "super")]
    pub super_category: String,
    pub standard: bool,
}

#[derive(Deserialize)]
struct CategoryFile {
    results: Vec<CategoryInfo>,
}

/// Read-only index from category id to its metadata
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: BTreeMap<u32, CategoryInfo>,
}

impl CategoryIndex {
    /// Build an index, rejecting duplicate ids
    pub fn new(
        categories: impl IntoIterator<Item = CategoryInfo>,
    ) -> std::result::Result<Self, IngestError> {
        let mut map = BTreeMap::new();
        for info in categories {
            let id = info.id;
            if map.insert(id, info).is_some() {
                return Err(IngestError::DuplicateCategory(id));
            }
        }
        Ok(Self { categories: map })
    }

    /// Parse the Rebrickable category JSON document
    pub fn from_json_str(content: &str) -> std::result::Result<Self, IngestError> {
        let file: CategoryFile = serde_json::from_str(content)?;
        Self::new(file.results)
    }

    /// Load the Rebrickable category JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read category file: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid category file: {}", path.display()))
    }

    pub fn get(&self, id: u32) -> Option<&CategoryInfo> {
        self.categories.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.categories.contains_key(&id)
    }

    /// Largest category id, which bounds the per-category totals table
    pub fn max_id(&self) -> Option<u32> {
        self.categories.keys().next_back().copied()
    }

    /// Display name of a category, empty when unknown
    pub fn name(&self, id: u32) -> &str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or("")
    }

    /// Categories in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryInfo> {
        self.categories.values()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
