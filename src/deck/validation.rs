// Input rules that need no access to the store.
// Existence, emptiness and duplicate checks live in DeckService.

use super::{
    cards::{Card, Rank, Suit},
    types::CardRequest,
};
use crate::shared::AppError;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Rejects empty and all-whitespace deck ids
pub fn check_deck_id_format(deck_id: &str) -> Result<(), AppError> {
    if is_blank(deck_id) {
        return Err(AppError::InvalidInput("Deck id not valid".to_string()));
    }
    Ok(())
}

/// Turns a wire card into a canonical `Card`, reporting the first problem found
pub fn parse_card(card: Option<&CardRequest>) -> Result<Card, AppError> {
    let card = card
        .ok_or_else(|| AppError::InvalidInput("Card cannot be null or empty".to_string()))?;

    let (suit, rank) = match (card.suit.as_deref(), card.rank.as_deref()) {
        (Some(suit), Some(rank)) => (suit, rank),
        _ => {
            return Err(AppError::InvalidInput(
                "Invalid card - suit and rank must be provided".to_string(),
            ))
        }
    };

    if is_blank(suit) {
        return Err(AppError::InvalidInput(
            "Invalid card - suit cannot be empty".to_string(),
        ));
    }

    if is_blank(rank) {
        return Err(AppError::InvalidInput(
            "Invalid card - rank cannot be empty".to_string(),
        ));
    }

    let suit = Suit::try_from(suit).map_err(|value| {
        AppError::InvalidInput(format!(
            "Invalid suit: {}, valid suits are {}",
            value,
            Suit::valid_values()
        ))
    })?;

    let rank = Rank::try_from(rank).map_err(|value| {
        AppError::InvalidInput(format!(
            "Invalid rank: {}, valid ranks are {}",
            value,
            Rank::valid_values()
        ))
    })?;

    Ok(Card::new(suit, rank))
}
