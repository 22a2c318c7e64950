//! # vernis
//!
//! Vernis - Baseline compatibility analyzer for Vue SFC files.
//!
//! ## Name Origin
//!
//! **Vernis** (/vɛʁ.ni/) is the French word for varnish, the final
//! transparent layer that decides how well a painting survives exposure.
//! Vernis inspects the web-platform features a component is coated with
//! and reports how well they survive exposure to real browsers.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vernis")]
#[command(about = "Baseline compatibility analyzer for Vue SFC files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze Vue SFC files for Baseline compatibility (default command)
    Analyze(commands::analyze::AnalyzeArgs),
}

fn main() {
    // RUST_LOG controls verbosity; diagnostics go to stderr so stdout
    // stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match Cli::parse().command {
        Some(Commands::Analyze(args)) => commands::analyze::run(args),
        None => commands::analyze::run(commands::analyze::AnalyzeArgs::default()),
    }
}
