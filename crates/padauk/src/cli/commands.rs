//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Rate-limited, cached, retrying Myanmar↔Chinese translation gateway.
#[derive(Parser)]
#[command(name = "padauk", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Translate a phrase, streaming the result to stdout
    Translate {
        /// Text to translate (Burmese or Chinese)
        text: String,

        /// Caller identity used for cooldown tracking
        #[arg(short, long, default_value = "cli")]
        caller: String,
    },

    /// Look up a phrase in the static fallback glossary
    Glossary {
        /// Text to look up
        text: String,
    },
}
