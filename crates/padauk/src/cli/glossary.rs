//! Glossary command handler.

use padauk_core::Glossary;

/// Print the fallback glossary entry for a phrase, if any.
pub fn handle_glossary_command(text: &str) {
    let glossary = Glossary::default();

    match glossary.lookup(text) {
        Some(translation) => println!("{}", translation),
        None => println!("(no glossary entry)"),
    }
}
