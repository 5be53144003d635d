//! Line-delimited JSON exporter

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ExportError;
use crate::model::CommitRecord;

/// Write one JSON object per line, no enclosing array.
///
/// Field order follows the record's declaration order. An empty record
/// list writes an empty file.
pub fn write(records: &[CommitRecord], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
