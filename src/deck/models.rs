use serde::{Deserialize, Serialize};

use super::cards::Card;

/// A deck as handed out by the store. The front of `cards` is dealt first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: String,          // Decimal id minted by the store, starting at "1"
    pub cards: Vec<Card>,    // Deal order, index 0 is the next card out
}

impl Deck {
    pub fn new(id: String, cards: Vec<Card>) -> Self {
        Self { id, cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}
