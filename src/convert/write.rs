// src/convert/write.rs

use anyhow::{Context, Result};
use serde_json;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::ConversionDocument;

/// Serialize `document` as 2-space-indented JSON to `path`, creating or
/// truncating the file. Callers only invoke this once parsing has fully
/// succeeded, so a failed run never leaves a truncated output behind.
pub fn write_document(document: &ConversionDocument, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    // pretty-print with a trailing newline
    serde_json::to_writer_pretty(&mut writer, document)
        .with_context(|| format!("serializing JSON to {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(())
}
