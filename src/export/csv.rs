//! CSV exporter

use std::path::Path;

use super::ExportError;
use crate::model::CommitRecord;

/// Write records as comma-separated text with a header row.
pub fn write(records: &[CommitRecord], path: &Path) -> Result<(), ExportError> {
    let mut writer = ::csv::Writer::from_path(path)?;

    writer.write_record(CommitRecord::COLUMNS)?;
    for record in records {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(())
}
