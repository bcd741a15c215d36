//! A card is a prompt/answer pair shown face-down in the deck.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn fresh_id() -> Uuid {
    Uuid::new_v4()
}

/// A single flashcard. The `id` identifies the card for the lifetime of the
/// process only: it is never written to disk and is regenerated on every
/// load, so identity is session-local.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    #[serde(skip, default = "fresh_id")]
    pub id: Uuid,
    pub prompt: String,
    pub answer: String,
}

impl Card {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// The built-in deck used when nothing has been persisted yet.
    /// Order is fixed: the last card is on top of the deck.
    pub fn example_deck() -> Vec<Card> {
        vec![
            Card::new(
                "Who was the first captain of the original Enterprise, NCC 1701?",
                "Robert April",
            ),
            Card::new("Who played the 13th Doctor in Doctor Who?", "Jodie Whittaker"),
            Card::new(
                "Who played Wesley Crusher on Star Trek: The Next Generation?",
                "Wil Wheaton",
            ),
            Card::new(
                "Who played Starbuck in the Battlestar Galactica remake?",
                "Katee Sackhoff",
            ),
        ]
    }
}
