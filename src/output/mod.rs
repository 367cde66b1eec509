//! Output module
//!
//! GeoJSON document types and the file writer.
//!
//! # Overview
//!
//! This module provides:
//! - `Feature` / `FeatureCollection` - The GeoJSON output document
//! - `GeoJsonWriter` - Serializes a collection into a file in one write

mod geojson;
mod writer;

pub use geojson::{Feature, FeatureCollection, SchoolProperties};
pub use writer::{write_feature_collection, GeoJsonWriter};
