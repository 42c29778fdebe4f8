// Library crate for the card deck service
// This file exposes the public API for the binary and integration tests

pub mod app;
pub mod config;
pub mod deck;
pub mod middleware;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::{router, DECKS_BASE_PATH};
pub use config::ServerConfig;
pub use deck::{
    Card, CardRequest, Deck, DeckRepository, DeckService, InMemoryDeckRepository, Rank, Suit,
};
pub use shared::{AppError, AppState, ErrorResponse};
