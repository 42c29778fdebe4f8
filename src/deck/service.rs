use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    cards::Card,
    models::Deck,
    repository::{DealCardResult, DeckRepository, ReturnCardResult},
    types::CardRequest,
    validation,
};
use crate::shared::AppError;

fn deck_not_found() -> AppError {
    AppError::NotFound("Deck not found".to_string())
}

fn deck_empty() -> AppError {
    AppError::NotFound("Deck is empty".to_string())
}

fn duplicate_card() -> AppError {
    AppError::InvalidInput(
        "Card already in deck - cannot return card that is already in deck".to_string(),
    )
}

/// Service for handling deck business logic
///
/// Every mutating operation validates its input fully before touching the
/// store. The store's own outcome is still mapped afterwards, so another
/// request emptying the deck in between surfaces as "Deck is empty" rather
/// than an internal error.
pub struct DeckService {
    repository: Arc<dyn DeckRepository + Send + Sync>,
}

impl DeckService {
    pub fn new(repository: Arc<dyn DeckRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Lists every deck id, failing with NotFound when no deck exists yet
    #[instrument(skip(self))]
    pub async fn list_deck_ids(&self) -> Result<Vec<String>, AppError> {
        let deck_ids = self.repository.list_deck_ids().await?;
        if deck_ids.is_empty() {
            debug!("No decks in store");
            return Err(AppError::NotFound("No decks found".to_string()));
        }

        info!(deck_count = deck_ids.len(), "Deck ids retrieved");
        Ok(deck_ids)
    }

    #[instrument(skip(self))]
    pub async fn create_deck(&self) -> Result<Deck, AppError> {
        let deck = self.repository.create_deck().await?;
        info!(deck_id = %deck.id, "Deck created");
        Ok(deck)
    }

    /// Fetches a deck, which must exist and hold at least one card
    #[instrument(skip(self))]
    pub async fn get_deck(&self, deck_id: &str) -> Result<Deck, AppError> {
        self.validate_deck_id(deck_id).await?;
        let deck = self.validate_deck_state(deck_id).await?;

        debug!(deck_id = %deck.id, card_count = deck.len(), "Deck fetched");
        Ok(deck)
    }

    /// Deals the front card of a deck
    #[instrument(skip(self))]
    pub async fn deal_card(&self, deck_id: &str) -> Result<Card, AppError> {
        self.validate_deck_id(deck_id).await?;
        self.validate_deck_state(deck_id).await?;

        match self.repository.deal_card(deck_id).await? {
            DealCardResult::Dealt(card) => {
                info!(deck_id = %deck_id, card = %card, "Card dealt");
                Ok(card)
            }
            DealCardResult::DeckEmpty => {
                warn!(deck_id = %deck_id, "Deck emptied by a concurrent deal");
                Err(deck_empty())
            }
            DealCardResult::DeckNotFound => Err(deck_not_found()),
        }
    }

    /// Returns a card to the end of a deck, rejecting malformed cards and duplicates
    #[instrument(skip(self))]
    pub async fn return_card(
        &self,
        deck_id: &str,
        card: Option<CardRequest>,
    ) -> Result<(), AppError> {
        self.validate_deck_id(deck_id).await?;
        let card = self.validate_card(card.as_ref(), deck_id).await?;

        match self.repository.return_card(deck_id, card).await? {
            ReturnCardResult::Returned => {
                info!(deck_id = %deck_id, card = %card, "Card returned to deck");
                Ok(())
            }
            ReturnCardResult::AlreadyInDeck => {
                warn!(deck_id = %deck_id, card = %card, "Card returned by a concurrent request");
                Err(duplicate_card())
            }
            ReturnCardResult::DeckNotFound => Err(deck_not_found()),
        }
    }

    /// Shuffles a deck. Empty decks can be shuffled.
    #[instrument(skip(self))]
    pub async fn shuffle_deck(&self, deck_id: &str) -> Result<(), AppError> {
        self.validate_deck_id(deck_id).await?;

        if !self.repository.shuffle_deck(deck_id).await? {
            return Err(deck_not_found());
        }

        info!(deck_id = %deck_id, "Deck shuffled");
        Ok(())
    }

    /// Fails with InvalidInput for a blank id and NotFound for an unknown one
    pub async fn validate_deck_id(&self, deck_id: &str) -> Result<(), AppError> {
        validation::check_deck_id_format(deck_id)?;

        if !self.repository.deck_exists(deck_id).await? {
            debug!(deck_id = %deck_id, "Deck id not in store");
            return Err(deck_not_found());
        }
        Ok(())
    }

    /// Fails with NotFound when the deck has no cards left
    pub async fn validate_deck_state(&self, deck_id: &str) -> Result<Deck, AppError> {
        let deck = self
            .repository
            .get_deck(deck_id)
            .await?
            .ok_or_else(deck_not_found)?;

        if deck.is_empty() {
            return Err(deck_empty());
        }
        Ok(deck)
    }

    /// Checks card legality, then that the deck does not already hold it
    pub async fn validate_card(
        &self,
        card: Option<&CardRequest>,
        deck_id: &str,
    ) -> Result<Card, AppError> {
        let card = validation::parse_card(card)?;

        let deck = self
            .repository
            .get_deck(deck_id)
            .await?
            .ok_or_else(deck_not_found)?;

        if deck.contains(&card) {
            return Err(duplicate_card());
        }
        Ok(card)
    }
}
