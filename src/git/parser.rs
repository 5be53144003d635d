//! History log output parser (git log)

use super::constants::{FIELD_SEPARATOR, LOG_FIELD_COUNT};
use crate::model::CommitRecord;

/// Parser for git command output
pub struct Parser;

impl Parser {
    /// Parse history log output into a list of commit records.
    ///
    /// One record per non-empty line, in the order git emitted them
    /// (newest first). Zero lines parse to zero records.
    pub fn parse_log(output: &str) -> Vec<CommitRecord> {
        output
            .lines()
            .filter(|line| !line.is_empty())
            .map(Self::parse_log_line)
            .collect()
    }

    /// Parse one `<hash>|<author>|<date>|<subject>` line.
    ///
    /// The split is capped at four fields: a subject is free text and
    /// may itself contain the delimiter, so only the first three `|`
    /// are significant and everything after them is the message,
    /// verbatim. Short lines yield empty trailing fields rather than an
    /// error.
    fn parse_log_line(line: &str) -> CommitRecord {
        let mut fields = line.splitn(LOG_FIELD_COUNT, FIELD_SEPARATOR);
        CommitRecord {
            hash: fields.next().unwrap_or("").to_string(),
            author: fields.next().unwrap_or("").to_string(),
            date: fields.next().unwrap_or("").to_string(),
            message: fields.next().unwrap_or("").to_string(),
        }
    }
}
