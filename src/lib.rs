pub mod export;
pub mod feedback;
pub mod models;
pub mod storage;

pub use models::{Card, DeckStore, GameSession, Phase, Settings};
