//! Cell decoder module
//!
//! Turns the JSON text stored in the `predictions` and `geom` columns into
//! typed values.
//!
//! # Overview
//!
//! - `Predictions` - Class-label probabilities with a required `school` score
//! - `Geometry` - GeoJSON geometry, coordinates kept exactly as written
//! - `decode_table` - Decodes every row, failing on the first bad cell

mod decoders;
mod types;

pub use decoders::{decode_cell, decode_record, decode_table};
pub use types::{DecodedRecord, Geometry, Position, Predictions};
