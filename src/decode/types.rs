//! Decoded cell types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// ============================================================================
// Predictions
// ============================================================================

/// Class probabilities produced by the school detection model
///
/// `school` is required; a prediction map without it fails to decode.
/// Labels other than the two known ones are ignored. The score keeps its
/// JSON spelling so `1` is written back as `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    /// Confidence that the tile contains a school
    pub school: Number,
    /// Confidence that it does not
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_school: Option<f64>,
}

impl Predictions {
    /// The `school` score as a float for comparisons
    #[inline]
    pub fn school_score(&self) -> f64 {
        self.school.as_f64().unwrap_or(f64::NAN)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// A single coordinate tuple.
///
/// Stored as JSON numbers so `[0,0]` is written back as `[0,0]`, not
/// `[0.0,0.0]`.
pub type Position = Vec<Number>;

/// Bounding box member allowed on any GeoJSON geometry
type BBox = Option<Vec<Number>>;

/// Members outside the geometry schema, e.g. the `crs` written by PostGIS
type Foreign = Map<String, Value>;

/// GeoJSON geometry object
///
/// Only the structure is checked (known `type`, correctly nested
/// coordinates). Coordinate values and foreign members are passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: BBox,
        #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
        foreign: Foreign,
    },
    MultiPoint {
        coordinates: Vec<Position>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: BBox,
        #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
        foreign: Foreign,
    },
    LineString {
        coordinates: Vec<Position>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: BBox,
        #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
        foreign: Foreign,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: BBox,
        #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
        foreign: Foreign,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: BBox,
        #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
        foreign: Foreign,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: BBox,
        #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
        foreign: Foreign,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: BBox,
        #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
        foreign: Foreign,
    },
}

impl Geometry {
    /// Build a point from two coordinates
    pub fn point(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Self::Point {
            coordinates: vec![x.into(), y.into()],
            bbox: None,
            foreign: Foreign::new(),
        }
    }
}

// ============================================================================
// Decoded Record
// ============================================================================

/// An input row with both JSON cells decoded
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRecord {
    /// 1-based data row number
    pub row: usize,
    /// Row identifier, if present
    pub id: Option<String>,
    /// Decoded prediction map
    pub predictions: Predictions,
    /// Decoded geometry
    pub geometry: Geometry,
}

impl DecodedRecord {
    /// The `school` confidence score
    #[inline]
    pub fn school_score(&self) -> f64 {
        self.predictions.school_score()
    }
}
