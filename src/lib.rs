//! Wavedump - incremental RIFF/WAVE serializer library.
//!
//! This module exposes the CLI types for tools like man page generation.

use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
pub mod dump;
pub mod error;
pub mod progress;
pub mod riff;
pub mod verbosity;

pub use dump::{Destination, DumpSession};
pub use error::DumpError;
pub use progress::Progress;
pub use verbosity::Verbosity;

#[derive(Parser)]
#[command(name = "wavedump")]
#[command(about = "Wavedump - stream PCM samples into RIFF/WAVE files or stdout")]
#[command(version)]
pub struct Cli {
    /// Suppress all output except errors and requested content
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show detailed output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the clap Command for man page generation.
    pub fn cmd() -> clap::Command {
        <Self as CommandFactory>::command()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serialize raw PCM samples into a WAV container
    Dump(commands::dump::DumpArgs),

    /// Print the chunk layout of a WAV file
    Inspect(commands::inspect::InspectArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
