// src/convert/types.rs

use serde::{Deserialize, Serialize};

/// One (table, column, chunk) triple as parsed from a data row.
///
/// Field declaration order is the JSON key order the consumer expects:
/// `table_name`, `column_name`, `chunk_id`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct MemorySegment {
    pub table_name: String,
    pub column_name: String,
    pub chunk_id: i64,
}

/// The top-level envelope written to the output file.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ConversionDocument {
    /// Label taken verbatim from the first CLI argument. Not validated
    /// against any enumeration.
    #[serde(rename = "type")]
    pub segment_type: String,
    /// Segments in input-row order, header excluded.
    pub memory_segments: Vec<MemorySegment>,
}
