//! Optional TOML configuration for data-file locations
//!
//! # Example
//! ```toml
//! categories = "data/rebrickable_part_categories.json"
//! weight_cache = "data/bricklink_weight_cache.json"
//! format = "json"
//! ```

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CATEGORIES_FILE: &str = "rebrickable_part_categories.json";
pub const DEFAULT_WEIGHT_CACHE_FILE: &str = "bricklink_weight_cache.json";

/// Values read from the config file; all optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub categories: Option<PathBuf>,
    pub weight_cache: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub set_num: String,
    pub divisions: u32,
    pub parts_files: Vec<PathBuf>,
    pub categories: PathBuf,
    pub weight_cache: PathBuf,
    pub set_info: Option<PathBuf>,
    pub weights: Vec<(String, f64)>,
    pub format: OutputFormat,
}

impl Settings {
    /// Merge command-line values over config-file values over defaults
    pub fn resolve(cli: &crate::cli::Cli, file: FileConfig) -> Self {
        let parts_files = if cli.parts.is_empty() {
            vec![PathBuf::from(format!("{}.parts.json", cli.set_num))]
        } else {
            cli.parts.clone()
        };

        Self {
            set_num: cli.set_num.clone(),
            divisions: cli.divisions,
            parts_files,
            categories: cli
                .categories
                .clone()
                .or(file.categories)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATEGORIES_FILE)),
            weight_cache: cli
                .weight_cache
                .clone()
                .or(file.weight_cache)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WEIGHT_CACHE_FILE)),
            set_info: cli.set_info.clone(),
            weights: cli.weights.clone(),
            format: cli.format.or(file.format).unwrap_or(OutputFormat::Text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::from_toml_str(
            r#"
            categories = "data/cats.json"
            weight_cache = "data/weights.json"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.categories, Some(PathBuf::from("data/cats.json")));
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FileConfig::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["kitdivide", "10270-1", "4"]);
        let settings = Settings::resolve(&cli, FileConfig::default());
        assert_eq!(settings.parts_files, vec![PathBuf::from("10270-1.parts.json")]);
        assert_eq!(settings.categories, PathBuf::from(DEFAULT_CATEGORIES_FILE));
        assert_eq!(settings.weight_cache, PathBuf::from(DEFAULT_WEIGHT_CACHE_FILE));
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.set_info.is_none());
        assert!(settings.weights.is_empty());
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli::parse_from(["kitdivide", "10270-1", "4", "--categories", "mine.json"]);
        let file = FileConfig {
            categories: Some(PathBuf::from("file.json")),
            weight_cache: Some(PathBuf::from("weights.json")),
            format: Some(OutputFormat::Json),
        };
        let settings = Settings::resolve(&cli, file);
        assert_eq!(settings.categories, PathBuf::from("mine.json"));
        assert_eq!(settings.weight_cache, PathBuf::from("weights.json"));
        assert_eq!(settings.format, OutputFormat::Json);
    }
}
