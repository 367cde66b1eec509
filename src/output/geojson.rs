//! GeoJSON output document
//!
//! Serializes as
//! `{"type":"FeatureCollection","features":[{"type":"Feature","geometry":...,"properties":{"school":...}}]}`.

use crate::decode::Geometry;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// `type` member of a feature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureTag {
    #[default]
    Feature,
}

/// `type` member of a feature collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum CollectionTag {
    #[default]
    FeatureCollection,
}

// ============================================================================
// Feature
// ============================================================================

/// Properties attached to every exported feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolProperties {
    /// The `school` confidence score of the source row, as spelled there
    pub school: Number,
}

/// One detected school
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    /// Geometry copied from the `geom` column
    pub geometry: Geometry,
    /// Score properties
    pub properties: SchoolProperties,
}

impl Feature {
    /// Create a feature for a geometry and its school score
    pub fn new(geometry: Geometry, school: Number) -> Self {
        Self {
            tag: FeatureTag::Feature,
            geometry,
            properties: SchoolProperties { school },
        }
    }

    /// The school score carried by this feature
    pub fn school(&self) -> f64 {
        self.properties.school.as_f64().unwrap_or(f64::NAN)
    }
}

// ============================================================================
// Feature Collection
// ============================================================================

/// Ordered collection of features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    tag: CollectionTag,
    /// Features in input row order
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a feature
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection has no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate features in order
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            tag: CollectionTag::FeatureCollection,
            features: iter.into_iter().collect(),
        }
    }
}
