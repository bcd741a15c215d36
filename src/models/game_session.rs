//! One timed play-through: the countdown and the reveal/judge state
//! machine. A session is created fresh for every new game and never
//! outlives the round.
//!
//! All mutation happens on the event-handling thread; intents that arrive
//! while they are not permitted (answer hidden, session paused or ended)
//! are ignored rather than surfaced as errors, which models the disabled
//! buttons in the UI.

use super::DeckStore;

/// Seconds on the clock at the start of every round.
pub const ROUND_SECONDS: u32 = 100;

/// Horizontal displacement a drag must exceed, on release, to count as a
/// judgement. Below this the card snaps back and nothing changes.
pub const DRAG_JUDGE_THRESHOLD: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    Paused,
    Ended,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    pub time_remaining: u32,
    pub phase: Phase,
    pub is_answer_revealed: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            time_remaining: ROUND_SECONDS,
            phase: Phase::Active,
            is_answer_revealed: false,
        }
    }

    /// One second of wall-clock time has passed. Only an active session
    /// counts down; reaching zero ends the round.
    pub fn tick(&mut self) {
        if self.phase != Phase::Active {
            return;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.phase = Phase::Ended;
        }
    }

    /// The player asked to see the answer on the current card.
    pub fn reveal(&mut self, deck: &DeckStore) {
        if self.phase == Phase::Active && !deck.is_empty() {
            self.is_answer_revealed = true;
        }
    }

    fn can_judge(&self, deck: &DeckStore) -> bool {
        self.phase == Phase::Active && self.is_answer_revealed && !deck.is_empty()
    }

    /// The player's verdict on the current card. Removes the top card,
    /// first recycling a copy to the bottom when the answer was incorrect
    /// and recycling is enabled; that order is load-bearing, the copy must
    /// be taken while the card is still on the deck.
    ///
    /// Returns whether the judgement was applied, so the caller can react
    /// to real transitions only.
    pub fn judge(&mut self, deck: &mut DeckStore, correct: bool, recycle_incorrect: bool) -> bool {
        if !self.can_judge(deck) {
            return false;
        }

        if !correct && recycle_incorrect {
            // can_judge guarantees a card is on the deck
            let _ = deck.recycle_top();
        }
        let _ = deck.remove_top();

        self.is_answer_revealed = false;

        if deck.is_empty() {
            self.phase = Phase::Ended;
        }

        true
    }

    /// A drag gesture finished with the given horizontal displacement.
    /// Judges the card when the displacement clears the threshold
    /// (positive means correct); otherwise nothing changes.
    ///
    /// Returns the verdict that was applied, if any.
    pub fn drag_released(
        &mut self,
        deck: &mut DeckStore,
        delta_x: f32,
        recycle_incorrect: bool,
    ) -> Option<bool> {
        if delta_x.abs() <= DRAG_JUDGE_THRESHOLD {
            return None;
        }

        let correct = delta_x > 0.0;
        self.judge(deck, correct, recycle_incorrect)
            .then_some(correct)
    }

    /// The window lost focus; stop the countdown.
    pub fn backgrounded(&mut self) {
        if self.phase == Phase::Active {
            self.phase = Phase::Paused;
        }
    }

    /// The window regained focus. Resumes only if there is still time on
    /// the clock and cards on the deck.
    pub fn foregrounded(&mut self, deck: &DeckStore) {
        if self.phase == Phase::Paused && self.time_remaining > 0 && !deck.is_empty() {
            self.phase = Phase::Active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Card;
    use crate::storage::cards::CardStore;
    use crate::storage::{Result as StorageResult, StorageError};

    /// The session never touches storage; any attempt is a test failure.
    struct NoStore;

    impl CardStore for NoStore {
        fn load(&self) -> StorageResult<Vec<Card>> {
            Err(StorageError::Io(std::io::Error::other("no store")))
        }

        fn save(&mut self, _cards: &[Card]) -> StorageResult<()> {
            panic!("game-time mutations must not persist");
        }
    }

    fn deck_of(prompts: &[&str]) -> DeckStore {
        let mut deck = DeckStore::new(Box::new(NoStore));
        for prompt in prompts {
            let end = deck.count();
            deck.insert_transient(Card::new(*prompt, format!("answer to {prompt}")), end);
        }
        deck
    }

    fn revealed_session(deck: &DeckStore) -> GameSession {
        let mut session = GameSession::new();
        session.reveal(deck);
        session
    }

    #[test]
    fn test_judge_correct_removes_top_and_hides_answer() {
        let mut deck = deck_of(&["A", "B"]);
        let mut session = revealed_session(&deck);

        assert!(session.judge(&mut deck, true, false));

        assert_eq!(deck.count(), 1);
        assert_eq!(deck.top().unwrap().prompt, "A");
        assert!(!session.is_answer_revealed);
        assert_eq!(session.phase, Phase::Active);
    }

    #[test]
    fn test_judge_incorrect_with_recycle_keeps_length() {
        let mut deck = deck_of(&["A", "B"]);
        let before_top = deck.top().unwrap().clone();
        let mut session = revealed_session(&deck);

        assert!(session.judge(&mut deck, false, true));

        // One removed from the top, one copy appended at the bottom
        assert_eq!(deck.count(), 2);
        assert_eq!(deck.cards()[0].prompt, before_top.prompt);
        assert_eq!(deck.cards()[0].answer, before_top.answer);
        assert_eq!(deck.top().unwrap().prompt, "A");
    }

    #[test]
    fn test_judge_incorrect_without_recycle_shrinks_deck() {
        let mut deck = deck_of(&["A", "B"]);
        let mut session = revealed_session(&deck);

        assert!(session.judge(&mut deck, false, false));

        assert_eq!(deck.count(), 1);
    }

    #[test]
    fn test_judge_without_reveal_is_noop() {
        let mut deck = deck_of(&["A", "B"]);
        let mut session = GameSession::new();
        let before = session.clone();

        assert!(!session.judge(&mut deck, true, false));

        assert_eq!(session, before);
        assert_eq!(deck.count(), 2);
    }

    #[test]
    fn test_judge_while_paused_is_noop() {
        let mut deck = deck_of(&["A"]);
        let mut session = revealed_session(&deck);
        session.backgrounded();
        let before = session.clone();

        assert!(!session.judge(&mut deck, true, false));

        assert_eq!(session, before);
        assert_eq!(deck.count(), 1);
    }

    #[test]
    fn test_reveal_requires_active_session_and_cards() {
        let empty = deck_of(&[]);
        let mut session = GameSession::new();
        session.reveal(&empty);
        assert!(!session.is_answer_revealed);

        let deck = deck_of(&["A"]);
        session.backgrounded();
        session.reveal(&deck);
        assert!(!session.is_answer_revealed);

        session.foregrounded(&deck);
        session.reveal(&deck);
        assert!(session.is_answer_revealed);
    }

    #[test]
    fn test_exhausting_deck_ends_session() {
        let mut deck = deck_of(&["A"]);
        let mut session = revealed_session(&deck);

        session.judge(&mut deck, true, false);

        assert!(deck.is_empty());
        assert_eq!(session.phase, Phase::Ended);
    }

    #[test]
    fn test_tick_counts_down_while_active() {
        let mut session = GameSession::new();
        session.tick();

        assert_eq!(session.time_remaining, ROUND_SECONDS - 1);
        assert_eq!(session.phase, Phase::Active);
    }

    #[test]
    fn test_tick_at_one_second_ends_round() {
        let mut session = GameSession::new();
        session.time_remaining = 1;

        session.tick();

        assert_eq!(session.time_remaining, 0);
        assert_eq!(session.phase, Phase::Ended);
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut session = GameSession::new();
        session.backgrounded();
        let before = session.clone();

        session.tick();

        assert_eq!(session, before);
    }

    #[test]
    fn test_time_never_goes_negative() {
        let mut session = GameSession::new();
        session.time_remaining = 1;

        session.tick();
        session.tick();
        session.tick();

        assert_eq!(session.time_remaining, 0);
    }

    #[test]
    fn test_foreground_needs_time_and_cards() {
        let deck = deck_of(&["A"]);
        let empty = deck_of(&[]);

        let mut session = GameSession::new();
        session.backgrounded();
        session.foregrounded(&empty);
        assert_eq!(session.phase, Phase::Paused);

        let mut timed_out = GameSession::new();
        timed_out.backgrounded();
        timed_out.time_remaining = 0;
        timed_out.foregrounded(&deck);
        assert_eq!(timed_out.phase, Phase::Paused);

        session.foregrounded(&deck);
        assert_eq!(session.phase, Phase::Active);
    }

    #[test]
    fn test_ended_is_terminal() {
        let mut deck = deck_of(&["A"]);
        let mut session = GameSession::new();
        session.time_remaining = 1;
        session.tick();

        session.foregrounded(&deck);
        assert_eq!(session.phase, Phase::Ended);

        session.reveal(&deck);
        assert!(!session.is_answer_revealed);
        assert!(!session.judge(&mut deck, true, false));
    }

    #[test]
    fn test_drag_below_threshold_changes_nothing() {
        let mut deck = deck_of(&["A", "B"]);
        let mut session = revealed_session(&deck);
        let before = session.clone();

        let verdict = session.drag_released(&mut deck, DRAG_JUDGE_THRESHOLD, false);

        assert_eq!(verdict, None);
        assert_eq!(session, before);
        assert_eq!(deck.count(), 2);
    }

    #[test]
    fn test_drag_sign_decides_verdict() {
        let mut deck = deck_of(&["A", "B"]);
        let mut session = revealed_session(&deck);

        assert_eq!(session.drag_released(&mut deck, 140.0, false), Some(true));
        assert_eq!(deck.count(), 1);

        session.reveal(&deck);
        assert_eq!(session.drag_released(&mut deck, -140.0, true), Some(false));
        // A was recycled: the copy at the bottom is now the whole deck
        assert_eq!(deck.count(), 1);
        assert_eq!(deck.top().unwrap().prompt, "A");
    }

    #[test]
    fn test_drag_without_reveal_is_noop() {
        let mut deck = deck_of(&["A"]);
        let mut session = GameSession::new();

        assert_eq!(session.drag_released(&mut deck, 500.0, false), None);
        assert_eq!(deck.count(), 1);
    }

    #[test]
    fn test_repeated_correct_judgements_drain_deck() {
        let mut deck = deck_of(&["A", "B", "C"]);
        let mut session = GameSession::new();

        for remaining in (0..3).rev() {
            session.reveal(&deck);
            assert!(session.judge(&mut deck, true, false));
            assert_eq!(deck.count(), remaining);
            assert!(!session.is_answer_revealed);
        }

        assert_eq!(session.phase, Phase::Ended);
    }
}
