// src/convert/read.rs

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

use super::MemorySegment;

/// Parse `;`-delimited segment metadata from `reader`.
///
/// The first record is always treated as a header and discarded without
/// inspecting its content (the format is positional, not name-based).
/// Every later record needs at least 3 fields; fields 0 and 1 are taken
/// verbatim, field 2 must be decimal-integer text.
///
/// Returns the segments in input order plus the total record count
/// (header included).
pub fn read_segments<R: Read>(reader: R) -> Result<(Vec<MemorySegment>, u64)> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut segments = Vec::new();
    let mut rows_read: u64 = 0;

    for (idx, record) in csv_reader.records().enumerate() {
        // 1-based row number for diagnostics; row 1 is the header.
        let row = idx + 1;
        let record = record.with_context(|| format!("reading CSV row {}", row))?;
        rows_read += 1;

        if idx == 0 {
            debug!(fields = record.len(), "skipping header row");
            continue;
        }

        if record.len() < 3 {
            bail!(
                "row {} has {} field(s), expected at least 3 (table_name;column_name;chunk_id)",
                row,
                record.len()
            );
        }

        let chunk_id: i64 = record[2].parse().with_context(|| {
            format!("row {}: chunk_id `{}` is not decimal-integer text", row, &record[2])
        })?;

        segments.push(MemorySegment {
            table_name: record[0].to_string(),
            column_name: record[1].to_string(),
            chunk_id,
        });
    }

    debug!(rows_read, segments = segments.len(), "parsed segment metadata");
    Ok((segments, rows_read))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_in_input_order() -> Result<()> {
        let csv = "table_name;column_name;chunk_id\norders;customer_id;0\norders;customer_id;1\n";
        let (segments, rows_read) = read_segments(Cursor::new(csv))?;

        assert_eq!(rows_read, 3);
        assert_eq!(
            segments,
            vec![
                MemorySegment {
                    table_name: "orders".into(),
                    column_name: "customer_id".into(),
                    chunk_id: 0,
                },
                MemorySegment {
                    table_name: "orders".into(),
                    column_name: "customer_id".into(),
                    chunk_id: 1,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn header_only_input_yields_no_segments() -> Result<()> {
        let (segments, rows_read) = read_segments(Cursor::new("table_name;column_name;chunk_id\n"))?;
        assert_eq!(rows_read, 1);
        assert!(segments.is_empty());
        Ok(())
    }

    #[test]
    fn empty_input_yields_no_segments() -> Result<()> {
        let (segments, rows_read) = read_segments(Cursor::new(""))?;
        assert_eq!(rows_read, 0);
        assert!(segments.is_empty());
        Ok(())
    }

    #[test]
    fn first_row_is_dropped_even_when_it_looks_like_data() -> Result<()> {
        // No header validation: row 1 is discarded no matter what it contains.
        let csv = "orders;customer_id;0\norders;customer_id;1\n";
        let (segments, _) = read_segments(Cursor::new(csv))?;
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].chunk_id, 1);
        Ok(())
    }

    #[test]
    fn short_row_is_an_error() {
        let csv = "h1;h2;h3\norders;customer_id\n";
        let err = read_segments(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("row 2"), "got: {err}");
    }

    #[test]
    fn non_numeric_chunk_id_is_an_error() {
        let csv = "h1;h2;h3\norders;customer_id;twelve\n";
        let err = read_segments(Cursor::new(csv)).unwrap_err();
        assert!(format!("{err:#}").contains("twelve"), "got: {err:#}");
    }

    #[test]
    fn negative_chunk_id_is_accepted() -> Result<()> {
        let csv = "h1;h2;h3\norders;customer_id;-1\n";
        let (segments, _) = read_segments(Cursor::new(csv))?;
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].chunk_id, -1);
        Ok(())
    }

    #[test]
    fn blank_lines_are_skipped() -> Result<()> {
        // Blank lines never surface as records; only non-empty rows count.
        let csv = "h1;h2;h3\n\norders;customer_id;1\n";
        let (segments, rows_read) = read_segments(Cursor::new(csv))?;
        assert_eq!(rows_read, 2);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].chunk_id, 1);
        Ok(())
    }
}
