//! Directory-splitting CLI.
//!
//! `add` records marker filenames in `.split`; `split` partitions the other
//! files of the working directory at those markers and moves each partition
//! into its own `split_<i>` directory. Failures map to stable per-kind exit
//! codes (see `dirsplit::exit_codes`).

use clap::{Parser, Subcommand};
use dirsplit::error::{Error, Result};
use dirsplit::{add, exit_codes, logging, split};

#[derive(Parser)]
#[command(
    name = "dirsplit",
    version,
    about = "Split files in a directory into sub-directories using added marker files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mark split points by adding filenames to `.split`.
    Add {
        /// Filenames used as split markers.
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Split files into numbered directories at the recorded markers.
    Split,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir().map_err(|source| Error::CurrentDir { source })?;
    match cli.command {
        Command::Add { files } => add::add(&root, &files),
        Command::Split => split::split(&root).map(|_| ()),
    }
}
