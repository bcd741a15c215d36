//! The card storage port and its JSON-file implementation.

use std::fs;
use std::path::PathBuf;

use crate::models::Card;

use super::{Result, write_atomic};

/// Where the deck is persisted. The deck store talks to this trait only,
/// so tests can swap in failing or in-memory stores.
pub trait CardStore {
    fn load(&self) -> Result<Vec<Card>>;
    fn save(&mut self, cards: &[Card]) -> Result<()>;
}

/// Cards persisted as a single pretty-printed JSON array of
/// `{prompt, answer}` objects. Card ids are not written; each load
/// produces cards with fresh ids.
pub struct JsonCardFile {
    path: PathBuf,
}

impl JsonCardFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CardStore for JsonCardFile {
    fn load(&self) -> Result<Vec<Card>> {
        let contents = fs::read_to_string(&self.path)?;
        let cards: Vec<Card> = serde_json::from_str(&contents)?;
        Ok(cards)
    }

    fn save(&mut self, cards: &[Card]) -> Result<()> {
        let json = serde_json::to_string_pretty(cards)?;
        write_atomic(&self.path, &json)
    }
}
