//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! padauk binary.

mod commands;
mod glossary;
mod translate;

pub use commands::{Cli, Commands};
pub use glossary::handle_glossary_command;
pub use translate::handle_translate_command;
