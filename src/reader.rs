//! CSV input with strict header validation.

use crate::error::{PipelineError, Result};
use crate::event::{RawRow, EXPECTED_COLUMNS};
use csv::ReaderBuilder;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const UTF8_BOM: &str = "\u{feff}";

/// Reads all rows from the CSV file at `path`.
pub fn read_events(path: &Path) -> Result<Vec<RawRow>> {
    debug!("Reading events from {}", path.display());
    let file = File::open(path)?;
    read_rows(file)
}

/// Reads all rows from a CSV reader.
///
/// The header must match [`EXPECTED_COLUMNS`] exactly, including order.
/// A leading UTF-8 byte order mark counts as part of the first column name.
/// Field values are returned untrimmed.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut reader = BufReader::new(reader);
    let has_bom = reader.fill_buf()?.starts_with(UTF8_BOM.as_bytes());
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    // the csv crate strips the BOM from headers, so put it back before comparing
    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 && has_bom && !h.starts_with(UTF8_BOM) {
                format!("{}{}", UTF8_BOM, h)
            } else {
                h.to_string()
            }
        })
        .collect();
    if !headers.iter().map(String::as_str).eq(EXPECTED_COLUMNS.iter().copied()) {
        return Err(PipelineError::SchemaMismatch {
            found: headers,
            expected: EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        });
    }

    let mut rows = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        if record.len() > EXPECTED_COLUMNS.len() {
            warn!(
                "Row {}: ignoring {} extra field(s)",
                row_idx + 2,
                record.len() - EXPECTED_COLUMNS.len()
            );
        }
        rows.push(RawRow::from_record(&record));
    }

    debug!("Read {} rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_str(csv: &str) -> Result<Vec<RawRow>> {
        read_rows(Cursor::new(csv))
    }

    fn assert_schema_mismatch(csv: &str) {
        match read_str(csv) {
            Err(PipelineError::SchemaMismatch { expected, .. }) => {
                assert_eq!(expected, EXPECTED_COLUMNS);
            }
            other => panic!("Expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_reads_matching_header() {
        let csv = "event_id,user_id,event_ts,event_type,amount\n1,2,2026-02-01T00:00:00Z,purchase,1.0\n";

        let rows = read_str(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("event_ts"), Some("2026-02-01T00:00:00Z"));
        assert_eq!(rows[0].get("amount"), Some("1.0"));
    }

    #[test]
    fn test_preserves_empty_and_raw_values() {
        let csv = "event_id,user_id,event_ts,event_type,amount\n1,, ts ,\"a,b\",\n";

        let rows = read_str(csv).unwrap();
        assert_eq!(rows[0].get("user_id"), Some(""));
        assert_eq!(rows[0].get("event_ts"), Some(" ts "));
        assert_eq!(rows[0].get("event_type"), Some("a,b"));
        assert_eq!(rows[0].get("amount"), Some(""));
    }

    #[test]
    fn test_preserves_row_order() {
        let csv = r#"event_id,user_id,event_ts,event_type,amount
3,1,t1,view,1
1,1,t2,view,2
2,1,t3,view,3"#;

        let rows = read_str(csv).unwrap();
        let ids: Vec<&str> = rows.iter().filter_map(|r| r.get("event_id")).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let rows = read_str("event_id,user_id,event_ts,event_type,amount\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_short_row_has_missing_fields() {
        let csv = "event_id,user_id,event_ts,event_type,amount\n1\n";

        let rows = read_str(csv).unwrap();
        assert_eq!(rows[0].get("event_id"), Some("1"));
        assert_eq!(rows[0].get("user_id"), None);
    }

    #[test]
    fn test_swapped_columns_rejected() {
        assert_schema_mismatch("user_id,event_id,event_ts,event_type,amount\n2,1,ts,view,1.0\n");
    }

    #[test]
    fn test_missing_column_rejected() {
        assert_schema_mismatch("event_id,user_id,event_ts,event_type\n1,2,ts,view\n");
    }

    #[test]
    fn test_extra_column_rejected() {
        assert_schema_mismatch("event_id,user_id,event_ts,event_type,amount,note\n");
    }

    #[test]
    fn test_renamed_column_rejected() {
        assert_schema_mismatch("event_id,user,event_ts,event_type,amount\n");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_schema_mismatch("");
    }

    #[test]
    fn test_byte_order_mark_rejected() {
        let csv = "\u{feff}event_id,user_id,event_ts,event_type,amount\n1,2,ts,view,1.0\n";

        match read_str(csv) {
            Err(PipelineError::SchemaMismatch { found, .. }) => {
                assert_eq!(found[0], "\u{feff}event_id");
                assert_eq!(found[1], "user_id");
            }
            other => panic!("Expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_reads_crlf_input() {
        let csv = "event_id,user_id,event_ts,event_type,amount\r\n1,2,ts,view,1.00\r\n";

        let rows = read_str(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("amount"), Some("1.00"));
    }

    #[test]
    fn test_mismatch_reports_found_columns() {
        let err = read_str("user_id,event_id,event_ts,event_type,amount\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Got [\"user_id\", \"event_id\""));
        assert!(message.contains("expected [\"event_id\", \"user_id\""));
    }
}
