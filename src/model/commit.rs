//! Commit record data model

use serde::{Deserialize, Serialize};

/// Represents one commit parsed from the history log.
///
/// Field declaration order is the column order in every export format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full commit hash (40 hex characters as emitted by git)
    pub hash: String,

    /// Author name
    pub author: String,

    /// Commit date (ISO 8601 with offset, passed through verbatim)
    pub date: String,

    /// Subject line; may contain the field delimiter, kept verbatim
    pub message: String,
}

impl CommitRecord {
    /// Column names, in export order.
    pub const COLUMNS: [&'static str; 4] = ["hash", "author", "date", "message"];

    /// Field values, in column order.
    pub fn fields(&self) -> [&str; 4] {
        [&self.hash, &self.author, &self.date, &self.message]
    }
}
