//! Padauk CLI binary.
//!
//! This binary provides command-line access to the translation gateway:
//! - Translate a phrase, streaming output as it arrives
//! - Query the static fallback glossary

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_glossary_command, handle_translate_command};

    // Load .env before reading any credentials
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Translate { text, caller } => {
            handle_translate_command(&text, &caller).await?;
        }

        Commands::Glossary { text } => {
            handle_glossary_command(&text);
        }
    }

    Ok(())
}
