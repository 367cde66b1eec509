//! Loader types
//!
//! Raw rows as they come out of the delimited-text export, before any of
//! the embedded JSON is decoded.

use crate::error::{Error, Result};
use csv::StringRecord;

/// Column holding the JSON-encoded class probabilities
pub const PREDICTIONS_COLUMN: &str = "predictions";

/// Column holding the JSON-encoded geometry
pub const GEOM_COLUMN: &str = "geom";

/// Optional row identifier column
pub const ID_COLUMN: &str = "id";

// ============================================================================
// Raw Record
// ============================================================================

/// One input row with its JSON cells still as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based data row number (the header is not counted)
    pub row: usize,
    /// Row identifier, if the export has an `id` column
    pub id: Option<String>,
    /// JSON text of the prediction map
    pub predictions: String,
    /// JSON text of the geometry
    pub geom: String,
}

impl RawRecord {
    /// Create a record without an identifier
    pub fn new(row: usize, predictions: impl Into<String>, geom: impl Into<String>) -> Self {
        Self {
            row,
            id: None,
            predictions: predictions.into(),
            geom: geom.into(),
        }
    }

    /// Set the identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

// ============================================================================
// Table
// ============================================================================

/// Ordered, fully materialized set of input rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<RawRecord>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a chunk of rows, keeping order
    pub fn append_chunk(&mut self, mut chunk: Vec<RawRecord>) {
        self.records.append(&mut chunk);
    }

    /// Rows in input order
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Iterate rows in input order
    pub fn iter(&self) -> std::slice::Iter<'_, RawRecord> {
        self.records.iter()
    }
}

impl From<Vec<RawRecord>> for Table {
    fn from(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a RawRecord;
    type IntoIter = std::slice::Iter<'a, RawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ============================================================================
// Column Layout
// ============================================================================

/// Positions of the interpreted columns within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnIndex {
    pub id: Option<usize>,
    pub predictions: usize,
    pub geom: usize,
}

impl ColumnIndex {
    /// Locate the interpreted columns in a header row
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let predictions = find(PREDICTIONS_COLUMN).ok_or_else(|| Error::MissingColumn {
            column: PREDICTIONS_COLUMN.to_string(),
        })?;
        let geom = find(GEOM_COLUMN).ok_or_else(|| Error::MissingColumn {
            column: GEOM_COLUMN.to_string(),
        })?;

        Ok(Self {
            id: find(ID_COLUMN),
            predictions,
            geom,
        })
    }

    /// Build a raw record from a data row
    pub fn extract(&self, row: usize, record: &StringRecord) -> Result<RawRecord> {
        let cell = |idx: usize, name: &str| {
            record.get(idx).map(str::to_string).ok_or_else(|| {
                Error::csv(format!("row {row} has no value for column '{name}'"))
            })
        };

        Ok(RawRecord {
            row,
            id: self.id.and_then(|idx| record.get(idx)).map(str::to_string),
            predictions: cell(self.predictions, PREDICTIONS_COLUMN)?,
            geom: cell(self.geom, GEOM_COLUMN)?,
        })
    }
}
