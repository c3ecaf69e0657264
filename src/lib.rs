//! kitdivide - Divide the parts of a building kit into evenly weighted groups
//!
//! This library provides a greedy balanced partitioner over weighted,
//! categorized parts, together with loaders for Rebrickable inventory and
//! category data and a persistent per-part weight cache.

pub mod aggregate;
pub mod category;
pub mod claim;
pub mod cli;
pub mod config;
pub mod divide;
pub mod error;
pub mod inventory;
pub mod part;
pub mod report;
pub mod select;
pub mod unit;
pub mod weight;

pub use category::{CategoryIndex, CategoryInfo};
pub use divide::{divide_parts, Division, Grouping};
pub use error::{DivideError, IngestError};
pub use part::Part;
pub use unit::{Granularity, SuperCategoryStandard, Unit};
