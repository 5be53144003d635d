//! Githist - Git commit history exporter
//!
//! Binary entry point for the CLI.

use clap::Parser as _;
use log::debug;

use githist::cli::Cli;
use githist::export::{self, ExportTarget};
use githist::git::{self, GitExecutor};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let cli = Cli::parse();
    run(cli)
}

/// Acquire the repository, read its history, write the artifact.
fn run(cli: Cli) -> color_eyre::Result<()> {
    if let Ok(version) = GitExecutor::new().version() {
        debug!("using git {version}");
    }

    let acquired = if cli.noclone {
        println!("Fetching commit history without cloning...");
        git::fetch_shallow(&cli.repo_url)?
    } else {
        println!("Cloning repository into {}...", cli.dest.display());
        let repo = git::clone_or_reuse(&cli.repo_url, &cli.dest)?;
        println!("Fetching commit history from cloned repository...");
        repo
    };

    let records = acquired.read_history()?;
    debug!("parsed {} commit records", records.len());
    // The transient fetch directory is only needed for the log read.
    drop(acquired);

    let target = ExportTarget {
        output_dir: cli.output_dir,
        base_name: cli.output,
        db_path: cli.db_path,
        table_name: cli.table_name,
    };
    export::export(&records, cli.format, &target)?;

    println!("Done!");
    Ok(())
}
