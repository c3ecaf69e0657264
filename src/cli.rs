//! CLI argument parsing for kitdivide

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Output format for the division report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "kitdivide")]
#[command(version)]
#[command(about = "Suggest ways to divide the parts of a set into evenly weighted groups", long_about = None)]
pub struct Cli {
    /// Set number (e.g. 10270-1)
    #[arg(value_name = "SET_NUM")]
    pub set_num: String,

    /// Number of divisions to aim for
    #[arg(value_name = "DIVISIONS")]
    pub divisions: u32,

    /// Inventory page files in Rebrickable set-parts format (default: <SET_NUM>.parts.json)
    #[arg(long = "parts", value_name = "FILE")]
    pub parts: Vec<PathBuf>,

    /// Rebrickable part category file
    #[arg(long = "categories", value_name = "FILE")]
    pub categories: Option<PathBuf>,

    /// BrickLink weight cache file
    #[arg(long = "weight-cache", value_name = "FILE")]
    pub weight_cache: Option<PathBuf>,

    /// Rebrickable set details file supplying the set name for the report header
    #[arg(long = "set-info", value_name = "FILE")]
    pub set_info: Option<PathBuf>,

    /// Record a BrickLink unit weight in the cache before dividing (repeatable)
    #[arg(long = "weight", value_name = "ID=GRAMS", value_parser = parse_weight)]
    pub weights: Vec<(String, f64)>,

    /// TOML config file with default data-file locations
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

/// Parse an `ID=GRAMS` weight entry
fn parse_weight(s: &str) -> Result<(String, f64), String> {
    let (id, grams) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=GRAMS, got '{}'", s))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing part id in '{}'", s));
    }
    let grams: f64 = grams
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight '{}'", grams))?;
    if !grams.is_finite() || grams < 0.0 {
        return Err(format!("weight must be a non-negative number, got '{}'", grams));
    }
    Ok((id.to_string(), grams))
}
