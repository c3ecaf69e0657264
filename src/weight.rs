//! Per-part unit weights
//!
//! Weights are keyed by BrickLink part id. The cache file is a flat JSON
//! object; BrickLink reports weights as strings, so both `"2.32"` and `2.32`
//! are accepted.

use crate::error::IngestError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of unit weights in grams
pub trait WeightSource {
    fn unit_weight(&mut self, bricklink_id: &str) -> std::result::Result<f64, IngestError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum CachedWeight {
    Number(f64),
    Text(String),
}

/// Weight cache persisted as JSON
#[derive(Debug, Clone, Default)]
pub struct WeightCache {
    path: Option<PathBuf>,
    weights: BTreeMap<String, CachedWeight>,
}

impl WeightCache {
    /// In-memory cache that is never written to disk
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache file; a missing file gives an empty cache bound to `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let weights = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read weight cache: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid weight cache JSON: {}", path.display()))?
        } else {
            warn!(path = %path.display(), "Weight cache not found, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            weights,
        })
    }

    pub fn from_json_str(content: &str) -> std::result::Result<Self, IngestError> {
        Ok(Self {
            path: None,
            weights: serde_json::from_str(content)?,
        })
    }

    pub fn insert(&mut self, bricklink_id: impl Into<String>, weight: f64) {
        self.weights
            .insert(bricklink_id.into(), CachedWeight::Number(weight));
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Write the cache back to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let content =
            serde_json::to_string_pretty(&self.weights).context("Failed to serialize weight cache")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write weight cache: {}", path.display()))?;
        debug!(path = %path.display(), entries = self.weights.len(), "Saved weight cache");
        Ok(())
    }
}

impl WeightSource for WeightCache {
    fn unit_weight(&mut self, bricklink_id: &str) -> std::result::Result<f64, IngestError> {
        match self.weights.get(bricklink_id) {
            Some(CachedWeight::Number(weight)) => Ok(*weight),
            Some(CachedWeight::Text(text)) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| IngestError::InvalidWeight {
                        id: bricklink_id.to_string(),
                        value: text.clone(),
                    })
            }
            None => Err(IngestError::MissingWeight(bricklink_id.to_string())),
        }
    }
}
