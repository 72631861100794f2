//! promptman - terminal manager for a translation pipeline's prompt library
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use pman_core::prelude::*;

/// Manage the prompt-template library of a translation pipeline
#[derive(Parser, Debug)]
#[command(name = "pman")]
#[command(about = "A TUI for browsing, editing and applying prompt templates", long_about = None)]
struct Args {
    /// Path to the template library root
    #[arg(value_name = "PATH")]
    library: Option<PathBuf>,

    /// Pipeline config file (overrides the location from settings)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    pman_core::logging::init()?;

    let library_root = args
        .library
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    pman_tui::run(&library_root, args.config).await
}
