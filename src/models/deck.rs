//! The deck store owns the ordered list of cards and mediates every
//! addition and removal. The last element of the list is the top of the
//! deck, i.e. the card currently shown.
//!
//! Authoring edits (add / delete in the edit screen) are written through to
//! storage immediately. Game-time mutations (recycling a missed card,
//! removing a judged card) are transient: the next load discards them.

use thiserror::Error;

use super::Card;
use crate::storage::cards::CardStore;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck is empty")]
    EmptyDeck,
}

pub struct DeckStore {
    cards: Vec<Card>,
    storage: Box<dyn CardStore>,
}

impl DeckStore {
    /// Creates an empty store; call [`DeckStore::load`] to populate it.
    pub fn new(storage: Box<dyn CardStore>) -> Self {
        Self {
            cards: Vec::new(),
            storage,
        }
    }

    /// Replaces the deck with the persisted cards. A read or parse failure
    /// is an expected first-run condition, not an error: the built-in
    /// example deck is substituted and the cause logged.
    pub fn load(&mut self) {
        match self.storage.load() {
            Ok(cards) => self.cards = cards,
            Err(err) => {
                log::debug!("could not load cards ({err}), using example deck");
                self.cards = Card::example_deck();
            }
        }
    }

    /// Authoring insert. The full list is persisted before returning.
    pub fn add_card(&mut self, card: Card, index: usize) {
        self.cards.insert(index, card);
        self.persist();
    }

    /// Authoring removal of one or more positions, order-independent.
    /// The full list is persisted before returning.
    pub fn remove_cards(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        // Highest index first so earlier removals don't shift later ones
        for &index in sorted.iter().rev() {
            if index < self.cards.len() {
                self.cards.remove(index);
            }
        }

        self.persist();
    }

    /// Game-time insert; not persisted.
    pub fn insert_transient(&mut self, card: Card, index: usize) {
        self.cards.insert(index, card);
    }

    /// Puts a copy of the current top card at the bottom of the deck.
    /// The copy gets a fresh id so ids stay unique within the deck.
    ///
    /// Callers must pair this with an immediate [`DeckStore::remove_top`],
    /// in that order: the copy is taken before the original leaves the deck.
    pub fn recycle_top(&mut self) -> Result<(), DeckError> {
        let top = self.cards.last().cloned().ok_or(DeckError::EmptyDeck)?;
        self.insert_transient(Card::new(top.prompt, top.answer), 0);
        Ok(())
    }

    /// Removes the card on top of the deck; not persisted.
    pub fn remove_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.cards) {
            log::error!("could not save cards: {err}");
        }
    }
}
