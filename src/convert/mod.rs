// src/convert/mod.rs

pub mod read;
pub mod types;
pub mod write;

pub use types::{ConversionDocument, MemorySegment};

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::BufReader,
    path::Path,
};
use tracing::debug;

/// Counts reported back to the caller after a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    /// Total CSV records read, header included.
    pub rows_read: u64,
    /// Segments written to the output document.
    pub segments: usize,
}

/// Convert `;`-delimited segment metadata at `input` into the JSON envelope
/// at `output`.
///
/// The whole input is parsed into memory first; the output file is only
/// created once parsing has succeeded, so a parse failure never produces a
/// partial output file.
#[tracing::instrument(level = "debug", skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    type_label: &str,
    input: P,
    output: Q,
) -> Result<ConversionStats> {
    let input = input.as_ref();
    let output = output.as_ref();

    let file = File::open(input)
        .with_context(|| format!("opening input file {}", input.display()))?;
    let (memory_segments, rows_read) = read::read_segments(BufReader::new(file))
        .with_context(|| format!("parsing {}", input.display()))?;

    let document = ConversionDocument {
        segment_type: type_label.to_string(),
        memory_segments,
    };
    debug!(segments = document.memory_segments.len(), "built conversion document");

    write::write_document(&document, output)?;

    Ok(ConversionStats {
        rows_read,
        segments: document.memory_segments.len(),
    })
}
