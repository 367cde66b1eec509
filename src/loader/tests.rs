//! Tests for CSV loader module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "id,predictions,geom\n";

fn row(id: u32, school: f64, x: i32) -> String {
    format!(
        "{id},\"{{\"\"not_school\"\": {ns}, \"\"school\"\": {school}}}\",\"{{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[{x},0]}}\"\n",
        ns = 1.0 - school
    )
}

fn sample_csv(rows: u32) -> String {
    let mut csv = HEADER.to_string();
    for i in 0..rows {
        csv.push_str(&row(i, 0.5, i as i32));
    }
    csv
}

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_quoted_json_cells() {
    let csv = sample_csv(1);
    let table = load_table_from_reader(csv.as_bytes(), 10).unwrap();

    assert_eq!(table.len(), 1);
    let rec = &table.records()[0];
    assert_eq!(rec.row, 1);
    assert_eq!(rec.id.as_deref(), Some("0"));
    assert_eq!(rec.predictions, r#"{"not_school": 0.5, "school": 0.5}"#);
    assert_eq!(rec.geom, r#"{"type":"Point","coordinates":[0,0]}"#);
}

#[test]
fn test_load_header_only() {
    let table = load_table_from_reader(HEADER.as_bytes(), 10).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_load_without_id_column() {
    let csv = "geom,predictions\n\"{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[1,2]}\",\"{\"\"school\"\":0.1}\"\n";
    let table = load_table_from_reader(csv.as_bytes(), 10).unwrap();

    let rec = &table.records()[0];
    assert_eq!(rec.id, None);
    assert_eq!(rec.predictions, r#"{"school":0.1}"#);
    assert_eq!(rec.geom, r#"{"type":"Point","coordinates":[1,2]}"#);
}

#[test]
fn test_load_multiline_cell() {
    let csv = "id,predictions,geom\n7,\"{\n  \"\"school\"\": 0.9\n}\",\"{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[0,0]}\"\n";
    let table = load_table_from_reader(csv.as_bytes(), 10).unwrap();

    assert_eq!(table.len(), 1);
    assert!(table.records()[0].predictions.contains('\n'));
}

// ============================================================================
// Chunking Tests
// ============================================================================

#[test]
fn test_chunk_boundaries_preserve_order() {
    let csv = sample_csv(7);

    for chunk_size in [1, 2, 3, 7, 5000] {
        let table = load_table_from_reader(csv.as_bytes(), chunk_size).unwrap();
        let ids: Vec<_> = table.iter().map(|r| r.id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5", "6"]);
        let rows: Vec<_> = table.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}

#[test]
fn test_chunked_reader_chunk_sizes() {
    let csv = sample_csv(5);
    let reader = ChunkedReader::from_reader(csv.as_bytes(), 2).unwrap();

    let sizes: Vec<usize> = reader.map(|c| c.unwrap().len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
}

#[test]
fn test_chunked_reader_exact_multiple() {
    let csv = sample_csv(4);
    let mut reader = ChunkedReader::from_reader(csv.as_bytes(), 2).unwrap();

    assert_eq!(reader.next().unwrap().unwrap().len(), 2);
    assert_eq!(reader.next().unwrap().unwrap().len(), 2);
    assert!(reader.next().is_none());
    assert_eq!(reader.rows_read(), 4);
}

#[test]
fn test_zero_chunk_size_rejected() {
    let err = load_table_from_reader(HEADER.as_bytes(), 0).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_missing_geom_column() {
    let csv = "id,predictions\n1,\"{}\"\n";
    let err = load_table_from_reader(csv.as_bytes(), 10).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { ref column } if column == "geom"));
}

#[test]
fn test_empty_input_has_no_columns() {
    let err = load_table_from_reader("".as_bytes(), 10).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { .. }));
}

#[test]
fn test_ragged_row_is_parse_error() {
    let csv = format!("{}{}", sample_csv(1), "9,only-two\n");
    let err = load_table_from_reader(csv.as_bytes(), 10).unwrap_err();
    assert!(matches!(err, Error::CsvParse { .. }));
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn test_load_table_missing_file() {
    let err = load_table("/nonexistent/export.csv", 10).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_load_table_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(sample_csv(3).as_bytes()).unwrap();

    let table = load_table(file.path(), 2).unwrap();
    assert_eq!(table.len(), 3);
}
