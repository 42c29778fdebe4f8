// Public API - what other modules can use
pub use cards::{Card, Rank, Suit};
pub use handlers::{create_deck, deal_card, get_deck, list_decks, return_card, shuffle_deck};
pub use models::Deck;
pub use repository::{DeckRepository, InMemoryDeckRepository};
pub use service::DeckService;
pub use types::CardRequest;

// Internal modules
mod cards;
mod handlers;
mod models;
pub mod repository;
mod service;
mod types;
mod validation;
