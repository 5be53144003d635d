//! Data models for Githist
//!
//! This module contains the data structures representing parsed Git
//! history, independent of how they were obtained or where they go.

mod commit;

pub use commit::CommitRecord;
