pub mod chat;
pub mod game;

pub use chat::{ChatMessage, Role};
pub use game::Game;
