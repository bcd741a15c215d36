//! Gameplay flags, persisted as a small JSON document.
use serde::{Deserialize, Serialize};

/// Boolean settings the player can toggle. Missing keys fall back to the
/// defaults, so a settings file from an older build keeps working.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Put a copy of an incorrectly answered card at the bottom of the deck.
    pub recycle_incorrect_answers: bool,
    /// Play the celebration when the deck is cleared.
    pub celebrate_on_complete: bool,
    /// Haptic feedback when a card is swiped away as correct.
    pub haptic_on_correct: bool,
    /// Haptic feedback when a card is swiped away as incorrect.
    pub haptic_on_incorrect: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recycle_incorrect_answers: false,
            celebrate_on_complete: true,
            haptic_on_correct: true,
            haptic_on_incorrect: false,
        }
    }
}
