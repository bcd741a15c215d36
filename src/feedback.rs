//! Haptic feedback as a capability the presentation layer invokes when it
//! observes a transition. The game session itself never touches this, so
//! the state machine stays free of platform calls.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    /// A card was swiped away as correct.
    Success,
    /// A card was swiped away as incorrect.
    Error,
    /// The deck was cleared.
    Celebration,
}

pub trait Haptics {
    fn play(&mut self, kind: FeedbackKind);
}

/// Desktop machines have no haptic hardware; the events are still logged
/// so a drive-through of the app shows where a mobile port would vibrate.
pub struct LoggingHaptics;

impl Haptics for LoggingHaptics {
    fn play(&mut self, kind: FeedbackKind) {
        log::debug!("haptic feedback: {kind:?}");
    }
}
