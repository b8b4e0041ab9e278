//! living-hinge - CLI for living hinge kerf patterns
//!
//! Usage:
//!   living-hinge fill <svg> -p <pattern>   Fill every shape with a hinge pattern
//!   living-hinge patterns                  List available patterns

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

use cli::{cmd_fill, cmd_patterns, FillArgs};

#[derive(Parser)]
#[command(name = "living-hinge", version)]
#[command(about = "Generate laser-cut living hinge patterns clipped to SVG shapes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill every closed shape of an SVG with a hinge pattern
    Fill(FillArgs),
    /// List available patterns
    Patterns,
}

/// Log to stderr so stdout stays clean for SVG/JSON output.
///
/// `RUST_LOG` overrides the default `info` level.
fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    match cli.command {
        Commands::Fill(args) => cmd_fill(&args)?,
        Commands::Patterns => cmd_patterns(),
    }

    Ok(())
}
