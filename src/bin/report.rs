//! Report generator: merges experiment CSVs from one or more machines
//! and renders the comparative figures into a folder.
//!
//! Artifacts written: `size-threads-time.png`, `distribution.png`,
//! `threads-time.png` and `size-time.png`.

use std::{io, path::PathBuf, process};

use clap::Parser;

use mmbench::{report, table, Error, Result};

/// Create graphics from the experiments data.
#[derive(Parser)]
#[command(name = "report", version)]
struct Cli {
    /// CSV files to be read and processed; outputs of mmbench, possibly
    /// from different machines
    #[arg(required = true)]
    input_files: Vec<PathBuf>,

    /// Folder where the images will be saved
    #[arg(short, long)]
    out: PathBuf,
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.out.is_dir() {
        return Err(Error::Io {
            path: cli.out.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "output folder does not exist"),
        });
    }

    let mut rows = table::load_and_merge(&cli.input_files)?;
    table::derive_time_seconds(&mut rows);

    for path in report::render_all(&rows, &cli.out)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("report: {e}");
        process::exit(1);
    }
}
