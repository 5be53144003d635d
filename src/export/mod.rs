//! Format exporters
//!
//! Serializes the parsed commit records into the selected output
//! format. Each run writes exactly one artifact; a failing writer
//! aborts the run without retry.

mod csv;
mod excel;
mod json;
mod parquet;
mod sqlite;

use std::io;
use std::path::PathBuf;

use clap::ValueEnum;
use log::debug;
use thiserror::Error;

use crate::model::CommitRecord;

/// Errors that can occur while writing an output artifact
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON write failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Arrow conversion failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet write failed: {0}")]
    Parquet(#[from] ::parquet::errors::ParquetError),

    #[error("Excel write failed: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),

    #[error("SQLite write failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Output format, selected with `--format`.
///
/// A closed set: unrecognized values are rejected at argument-parse
/// time, before any acquisition work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Parquet,
    Excel,
    Sqlite,
    Csv,
    Json,
}

impl Format {
    /// File extension for the file-based formats.
    ///
    /// Sqlite never uses this: its path comes from `--db-path`.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Parquet => "parquet",
            Self::Excel => "xlsx",
            Self::Sqlite => "db",
            Self::Csv => "csv",
            Self::Json => "jsonl",
        }
    }
}

/// Where the artifact goes.
#[derive(Debug, Clone)]
pub struct ExportTarget {
    /// Directory for file-based formats
    pub output_dir: PathBuf,
    /// Output file base name, without extension
    pub base_name: String,
    /// SQLite database path (sqlite format only)
    pub db_path: PathBuf,
    /// SQLite table name (sqlite format only)
    pub table_name: String,
}

impl ExportTarget {
    /// `<output_dir>/<base_name>.<ext>` for file-based formats.
    pub fn file_path(&self, format: Format) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.base_name, format.extension()))
    }
}

/// Write `records` in `format` to the target, printing a confirmation
/// line on success.
///
/// An empty record list still writes a well-formed artifact: header
/// with zero data rows, or an empty table/file.
pub fn export(
    records: &[CommitRecord],
    format: Format,
    target: &ExportTarget,
) -> Result<(), ExportError> {
    debug!("exporting {} records as {:?}", records.len(), format);
    match format {
        Format::Parquet => {
            let path = target.file_path(format);
            parquet::write(records, &path)?;
            println!("Data saved to Parquet file: {}", path.display());
        }
        Format::Excel => {
            let path = target.file_path(format);
            excel::write(records, &path)?;
            println!("Data saved to Excel file: {}", path.display());
        }
        Format::Sqlite => {
            sqlite::write(records, &target.db_path, &target.table_name)?;
            println!(
                "Data saved to table '{}' in SQLite database: {}",
                target.table_name,
                target.db_path.display()
            );
        }
        Format::Csv => {
            let path = target.file_path(format);
            csv::write(records, &path)?;
            println!("Data saved to CSV file: {}", path.display());
        }
        Format::Json => {
            let path = target.file_path(format);
            json::write(records, &path)?;
            println!("Data saved to JSON file: {}", path.display());
        }
    }
    Ok(())
}
