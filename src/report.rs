//! Text and JSON rendering of a division

use crate::divide::Division;
use crate::inventory::SetInfo;
use serde::Serialize;
use std::fmt::Write;

/// JSON form of one grouping
#[derive(Debug, Clone, Serialize)]
pub struct JsonGrouping {
    pub granularity: &'static str,
    pub name: String,
    pub weight: f64,
    pub part_count: usize,
}

/// JSON form of a whole division
#[derive(Debug, Clone, Serialize)]
pub struct JsonDivision {
    pub set_num: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    pub grand_total: f64,
    pub ideal_share: f64,
    pub groupings: Vec<JsonGrouping>,
}

impl JsonDivision {
    pub fn new(set: &SetInfo, division: &Division) -> Self {
        Self {
            set_num: set.set_num.clone(),
            set_name: set.name.clone(),
            grand_total: division.grand_total,
            ideal_share: division.ideal_share,
            groupings: division
                .groupings
                .iter()
                .map(|g| JsonGrouping {
                    granularity: g.granularity().label(),
                    name: g.name.clone(),
                    weight: g.weight,
                    part_count: g.parts.len(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Human-readable report
pub fn render_text(set: &SetInfo, division: &Division) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    match &set.name {
        Some(name) => {
            let _ = writeln!(out, "Data for set {} {}", set.set_num, name);
        }
        None => {
            let _ = writeln!(out, "Data for set {}", set.set_num);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total weight: {:.2} grams", division.grand_total);
    let _ = writeln!(out, "About {:.2} grams per division", division.ideal_share);
    let _ = writeln!(out);
    let _ = writeln!(out, "{} groupings:", division.groupings.len());
    for grouping in &division.groupings {
        let _ = writeln!(
            out,
            "{}: {}: {:.2}",
            grouping.granularity(),
            grouping.name,
            grouping.weight
        );
    }
    out
}
