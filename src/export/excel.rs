//! Excel exporter

use std::path::Path;

use rust_xlsxwriter::Workbook;

use super::ExportError;
use crate::model::CommitRecord;

/// Write records to a single-sheet workbook with a header row.
pub fn write(records: &[CommitRecord], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in CommitRecord::COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.fields().iter().enumerate() {
            sheet.write_string(row as u32 + 1, col as u16, *value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
