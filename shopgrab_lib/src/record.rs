//! The extracted product record.

use serde::Serialize;

/// Placeholder stored when a field cannot be extracted.
pub const SENTINEL: &str = "N/A";

/// One extracted product listing.
///
/// Immutable once constructed; every field holds either an extracted value
/// or [`SENTINEL`]. Failure to extract one field never prevents the others
/// from being extracted, so a record always has all four fields. The CSV
/// column schema is derived from this struct's shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub image_filename: String,
}
