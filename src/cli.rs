//! Command-line interface definition

use std::path::PathBuf;

use clap::Parser;

use crate::export::Format;

/// Analyze and export the commit history of a Git repository.
#[derive(Debug, Parser)]
#[command(name = "githist", version, about = "Analyze commit history of a Git repository")]
pub struct Cli {
    /// URL or path of the Git repository to analyze
    pub repo_url: String,

    /// Do not clone the repository; fetch commit history directly from remote
    #[arg(short = 'n', long)]
    pub noclone: bool,

    /// Directory to clone the repository into
    #[arg(short = 'd', long, default_value = "./cloned_repo")]
    pub dest: PathBuf,

    /// Base name for the output file, without extension
    #[arg(short = 'o', long, default_value = "commit_history")]
    pub output: String,

    /// Directory for file-based output
    #[arg(long, alias = "od", default_value = ".")]
    pub output_dir: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "parquet")]
    pub format: Format,

    /// Path to the SQLite database when the sqlite format is selected
    #[arg(long, alias = "db", default_value = "commit_history.db")]
    pub db_path: PathBuf,

    /// Table name in the database when the sqlite format is selected
    #[arg(short = 't', long, default_value = "commits")]
    pub table_name: String,
}
