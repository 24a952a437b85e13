//! CLI interface for ambience

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Procedural background loop generator
///
/// Run without a command to write the default loop to
/// assets/audio/music/background.wav.
#[derive(Parser)]
#[command(name = "ambience")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the loop to a WAV file
    Generate {
        /// Configuration file path (built-in defaults when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path, overriding the configuration
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "ambience.yaml")]
        config: PathBuf,
    },

    /// Generate an example configuration file
    Init,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate {
            config: None,
            output: None,
        }
    }
}
