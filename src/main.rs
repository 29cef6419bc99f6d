//! Experiment runner: sweeps the configured matrix sizes and thread
//! counts over the external executables and saves the results as CSV.
//! The output is meant to be fed to the `report` binary.

use std::{path::PathBuf, process};

use clap::Parser;

use mmbench::{config::Config, experiment, table, Result};

/// Run matrix multiplication experiments and save the data as CSV.
#[derive(Parser)]
#[command(name = "mmbench", version)]
struct Cli {
    /// CSV file where the results will be saved
    output_file: PathBuf,

    /// TOML file overriding the default sweep (sizes, thread counts,
    /// repetitions, seed, executables)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let rows = experiment::run_all(&config)?;
    table::write_csv(&cli.output_file, &rows)?;
    println!(
        "{} rows written to {}",
        rows.len(),
        cli.output_file.display()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("mmbench: {e}");
        process::exit(1);
    }
}
