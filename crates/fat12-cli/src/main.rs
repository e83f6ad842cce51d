//! FAT12 disk image inspector
//!
//! Two reports over a FAT12 floppy image: `info` (geometry/volume summary)
//! and `list` (recursive file listing).

use clap::{Parser, Subcommand};
use fat12_fs::report::{render_listing, VolumeSummary};
use fat12_pipeline::{ImageReader, OpenMode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fat12")]
#[command(about = "Read-only inspector for FAT12 disk images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the volume summary report
    Info {
        /// Path to the FAT12 image file
        image: PathBuf,
    },
    /// Print the recursive file listing report
    List {
        /// Path to the FAT12 image file
        image: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Info { image } => {
            tracing::info!(path = %image.display(), "building volume summary");
            let mut reader = ImageReader::open(image, OpenMode::Mmap)?;
            let summary = VolumeSummary::build(&mut reader)?;
            print!("{}", summary.render());
        }
        Command::List { image } => {
            tracing::info!(path = %image.display(), "walking directory tree");
            let mut reader = ImageReader::open(image, OpenMode::Mmap)?;
            let listing = render_listing(&mut reader)?;
            print!("{listing}");
        }
    }
    Ok(())
}
