//! JSON import/export for card lists.
//! Uses the same `{prompt, answer}` representation as the storage port, so
//! an exported file can be dropped in as a card file and vice versa.

use crate::models::Card;
use std::fs::File;
use std::io::{Read, Write};

/// Exports the cards to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_cards_to_path(cards: &[Card], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json_string = serde_json::to_string_pretty(cards)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports a card list from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_cards(filename: &str) -> Result<Vec<Card>, Box<dyn std::error::Error>> {
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let cards: Vec<Card> = serde_json::from_str(&contents)?;

    log::info!("{} cards imported from '{}'", cards.len(), filename);
    Ok(cards)
}
