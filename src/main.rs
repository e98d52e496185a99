//! LayerSmith - generate per-layer KLE diagrams from QMK keymap sources.
//!
//! One physical keyboard diagram serves as the template; every layer of the
//! keymap is rendered into its own copy with tap/hold legends and style
//! overrides substituted per key.

use anyhow::Result;
use clap::{Parser, Subcommand};
use layersmith::cli::{GenerateArgs, InspectArgs};

/// Generate per-layer KLE diagrams from QMK keymap sources
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every layer of a keymap into KLE diagram files
    Generate(GenerateArgs),
    /// Report parsed layers and mapping coverage without writing output
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    }
}
