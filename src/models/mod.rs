pub mod card;
pub mod deck;
pub mod game_session;
pub mod settings;

pub use card::Card;
pub use deck::{DeckError, DeckStore};
pub use game_session::{GameSession, Phase};
pub use settings::Settings;
