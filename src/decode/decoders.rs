//! Cell decoders
//!
//! Every row is decoded before any filtering happens, and the first bad
//! cell aborts the whole table.

use super::types::{DecodedRecord, Geometry, Predictions};
use crate::error::{Error, Result};
use crate::loader::{RawRecord, Table, GEOM_COLUMN, PREDICTIONS_COLUMN};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Decode one JSON cell into `T`, tagging failures with row and column
pub fn decode_cell<T: DeserializeOwned>(row: usize, column: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| Error::decode(row, column, e.to_string()))
}

/// Decode both JSON cells of a raw row
pub fn decode_record(raw: &RawRecord) -> Result<DecodedRecord> {
    let predictions: Predictions = decode_cell(raw.row, PREDICTIONS_COLUMN, &raw.predictions)?;
    let geometry: Geometry = decode_cell(raw.row, GEOM_COLUMN, &raw.geom)?;

    Ok(DecodedRecord {
        row: raw.row,
        id: raw.id.clone(),
        predictions,
        geometry,
    })
}

/// Decode every row of a table, in order
pub fn decode_table(table: &Table) -> Result<Vec<DecodedRecord>> {
    let records = table
        .iter()
        .map(decode_record)
        .collect::<Result<Vec<_>>>()?;

    debug!("Decoded {} rows", records.len());
    Ok(records)
}
