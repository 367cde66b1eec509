//! CSV loader module
//!
//! Reads the database export into an in-memory table.
//!
//! # Overview
//!
//! The loader module provides:
//! - `ChunkedReader` - Reads rows in bounded chunks
//! - `Table` / `RawRecord` - Rows with their JSON cells still as text
//! - `load_table` - Reads and concatenates every chunk in order

mod reader;
mod types;

pub use reader::{load_table, load_table_from_reader, ChunkedReader};
pub use types::{RawRecord, Table, GEOM_COLUMN, ID_COLUMN, PREDICTIONS_COLUMN};

#[cfg(test)]
mod tests;
