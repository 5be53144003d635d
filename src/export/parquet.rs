//! Parquet exporter

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use ::parquet::arrow::ArrowWriter;
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use super::ExportError;
use crate::model::CommitRecord;

/// Write records as a columnar Parquet file.
///
/// Four Utf8 columns in record field order, default writer properties,
/// no row-index column. Zero records write a valid zero-row file.
pub fn write(records: &[CommitRecord], path: &Path) -> Result<(), ExportError> {
    let schema = Arc::new(Schema::new(
        CommitRecord::COLUMNS
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, false))
            .collect::<Vec<_>>(),
    ));

    let columns: Vec<ArrayRef> = vec![
        column(records, |r| r.hash.as_str()),
        column(records, |r| r.author.as_str()),
        column(records, |r| r.date.as_str()),
        column(records, |r| r.message.as_str()),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns)?;

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn column<'a>(
    records: &'a [CommitRecord],
    field: impl Fn(&'a CommitRecord) -> &'a str,
) -> ArrayRef {
    Arc::new(StringArray::from_iter_values(records.iter().map(field)))
}
