//! Item data model and name handling for the itemdex catalog.
//!
//! This crate defines the raw and resolved item types plus the pure string
//! logic around item names: grade extraction, feature parsing, and slug
//! encoding. It has no I/O; consumers pass these types to `itemdex-catalog`
//! for loading and resolution.

pub mod features;
pub mod grade;
pub mod slug;
pub mod types;

pub use features::{Features, StatValue, parse_features};
pub use grade::{extract_grade, strip_grade};
pub use types::{DEFAULT_CLASS, ItemImage, RawItem, ResolvedItem, full_image_url};
