//! Chunked CSV reader
//!
//! Reads the export in fixed-size chunks of rows and concatenates them into
//! one [`Table`]. Chunking bounds the size of each read step; the result is
//! still fully materialized.

use crate::error::{Error, Result};
use crate::loader::types::{ColumnIndex, RawRecord, Table};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Iterator over chunks of raw records
pub struct ChunkedReader<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnIndex,
    chunk_size: usize,
    rows_read: usize,
    done: bool,
}

impl ChunkedReader<File> {
    /// Open a delimited-text file for chunked reading
    pub fn from_path(path: impl AsRef<Path>, chunk_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_reader(file, chunk_size)
    }
}

impl<R: Read> ChunkedReader<R> {
    /// Wrap any reader; the first row must be a header
    pub fn from_reader(reader: R, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::invalid_value(
                "chunk_size",
                "must be greater than zero",
            ));
        }

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = reader.headers().map_err(Error::from)?.clone();
        let columns = ColumnIndex::from_headers(&headers)?;

        Ok(Self {
            reader,
            columns,
            chunk_size,
            rows_read: 0,
            done: false,
        })
    }

    /// Number of data rows read so far
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    fn read_chunk(&mut self) -> Result<Vec<RawRecord>> {
        let mut chunk = Vec::with_capacity(self.chunk_size);
        let mut record = StringRecord::new();

        while chunk.len() < self.chunk_size {
            let more = self
                .reader
                .read_record(&mut record)
                .map_err(|e| record_error(self.rows_read + 1, e))?;
            if !more {
                self.done = true;
                break;
            }

            self.rows_read += 1;
            chunk.push(self.columns.extract(self.rows_read, &record)?);
        }

        Ok(chunk)
    }
}

impl<R: Read> Iterator for ChunkedReader<R> {
    type Item = Result<Vec<RawRecord>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_chunk() {
            Ok(chunk) if chunk.is_empty() => None,
            Ok(chunk) => Some(Ok(chunk)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Attach the data row number to parse errors; I/O errors pass through
fn record_error(row: usize, err: csv::Error) -> Error {
    if err.is_io_error() {
        return Error::from(err);
    }
    Error::csv(format!("row {row}: {err}"))
}

/// Load a whole delimited-text file into memory, reading `chunk_size` rows
/// at a time
pub fn load_table(path: impl AsRef<Path>, chunk_size: usize) -> Result<Table> {
    let path = path.as_ref();
    debug!("Loading {} in chunks of {chunk_size} rows", path.display());

    let table = collect_chunks(ChunkedReader::from_path(path, chunk_size)?)?;
    info!("Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Load a whole table from any reader
pub fn load_table_from_reader<R: Read>(reader: R, chunk_size: usize) -> Result<Table> {
    collect_chunks(ChunkedReader::from_reader(reader, chunk_size)?)
}

fn collect_chunks<R: Read>(chunks: ChunkedReader<R>) -> Result<Table> {
    let mut table = Table::new();
    for (n, chunk) in chunks.enumerate() {
        let chunk = chunk?;
        debug!("Read chunk {} ({} rows)", n + 1, chunk.len());
        table.append_chunk(chunk);
    }
    Ok(table)
}
