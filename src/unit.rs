//! Claimable units and their granularities

use crate::error::DivideError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const STANDARD_SUFFIX: &str = " Standard";
const NON_STANDARD_SUFFIX: &str = " Non-Standard";

/// Display name of the "everything left" unit
pub const REMAINING_NAME: &str = "All other parts";

/// Aggregation level a unit is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Remaining,
    SuperCategory,
    Category,
    SuperCategoryStandard,
    Part,
}

impl Granularity {
    /// Order used to break exact ties between candidates of different granularities
    pub const PRIORITY: [Granularity; 5] = [
        Granularity::Remaining,
        Granularity::SuperCategory,
        Granularity::Category,
        Granularity::SuperCategoryStandard,
        Granularity::Part,
    ];

    /// Short label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Granularity::Remaining => "grand_total",
            Granularity::SuperCategory => "super_cat",
            Granularity::Category => "cat",
            Granularity::SuperCategoryStandard => "super_cat_S_N",
            Granularity::Part => "part",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A super-category split by the standard flag, e.g. "Technic Non-Standard"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuperCategoryStandard {
    pub super_category: String,
    pub standard: bool,
}

impl SuperCategoryStandard {
    pub fn new(super_category: impl Into<String>, standard: bool) -> Self {
        Self {
            super_category: super_category.into(),
            standard,
        }
    }
}

impl fmt::Display for SuperCategoryStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.standard {
            STANDARD_SUFFIX
        } else {
            NON_STANDARD_SUFFIX
        };
        write!(f, "{}{}", self.super_category, suffix)
    }
}

impl FromStr for SuperCategoryStandard {
    type Err = DivideError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        // " Non-Standard" must be checked first: it also ends in "Standard"
        if let Some(name) = key.strip_suffix(NON_STANDARD_SUFFIX) {
            Ok(Self::new(name, false))
        } else if let Some(name) = key.strip_suffix(STANDARD_SUFFIX) {
            Ok(Self::new(name, true))
        } else {
            Err(DivideError::MalformedSuperCategoryKey(key.to_string()))
        }
    }
}

/// A group of parts that can be claimed in one step
#[derive(Debug, Clone, PartialEq)]
pub enum Unit {
    /// Every part not yet claimed
    Remaining,
    /// All parts of a super-category
    SuperCategory(String),
    /// All parts of a category id
    Category(u32),
    /// All parts of a super-category with a given standard flag
    SuperCategoryStandard(SuperCategoryStandard),
    /// A single part number
    Part(String),
}

impl Unit {
    pub fn granularity(&self) -> Granularity {
        match self {
            Unit::Remaining => Granularity::Remaining,
            Unit::SuperCategory(_) => Granularity::SuperCategory,
            Unit::Category(_) => Granularity::Category,
            Unit::SuperCategoryStandard(_) => Granularity::SuperCategoryStandard,
            Unit::Part(_) => Granularity::Part,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard() {
        let key: SuperCategoryStandard = "Bricks Standard".parse().unwrap();
        assert_eq!(key, SuperCategoryStandard::new("Bricks", true));
    }

    #[test]
    fn test_parse_non_standard() {
        let key: SuperCategoryStandard = "Technic Non-Standard".parse().unwrap();
        assert_eq!(key, SuperCategoryStandard::new("Technic", false));
    }

    #[test]
    fn test_parse_name_with_spaces() {
        let key: SuperCategoryStandard = "Minifig Upper Body Standard".parse().unwrap();
        assert_eq!(key.super_category, "Minifig Upper Body");
        assert!(key.standard);
    }

    #[test]
    fn test_parse_rejects_missing_suffix() {
        let err = "Technic".parse::<SuperCategoryStandard>().unwrap_err();
        assert_eq!(
            err,
            DivideError::MalformedSuperCategoryKey("Technic".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_suffix_without_space() {
        assert!("TechnicStandard".parse::<SuperCategoryStandard>().is_err());
        assert!("Technic-Standard".parse::<SuperCategoryStandard>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for key in ["Bricks Standard", "Plates Non-Standard"] {
            let parsed: SuperCategoryStandard = key.parse().unwrap();
            assert_eq!(parsed.to_string(), key);
        }
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(Granularity::PRIORITY[0], Granularity::Remaining);
        assert_eq!(Granularity::PRIORITY[4], Granularity::Part);
    }

    #[test]
    fn test_unit_granularity() {
        assert_eq!(Unit::Category(3).granularity(), Granularity::Category);
        assert_eq!(
            Unit::Part("3001".to_string()).granularity().label(),
            "part"
        );
    }
}
