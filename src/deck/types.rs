use serde::{Deserialize, Serialize};

/// Request payload for returning a card to a deck
///
/// Both fields are optional on the wire so that missing values reach
/// validation instead of failing JSON extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardRequest {
    pub suit: Option<String>,
    pub rank: Option<String>,
}

impl CardRequest {
    pub fn new(suit: &str, rank: &str) -> Self {
        Self {
            suit: Some(suit.to_string()),
            rank: Some(rank.to_string()),
        }
    }
}
