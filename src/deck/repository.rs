use async_trait::async_trait;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument};

use super::{cards::Card, models::Deck};
use crate::shared::AppError;

/// Cards of a single deck, locked independently of every other deck
type CardPile = Arc<Mutex<VecDeque<Card>>>;

/// Result of attempting to deal from a deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealCardResult {
    /// The front card, now removed from the deck
    Dealt(Card),
    /// Deck exists but has no cards left
    DeckEmpty,
    /// Deck does not exist
    DeckNotFound,
}

/// Result of attempting to return a card to a deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnCardResult {
    /// Card appended to the end of the deck
    Returned,
    /// An equal card is already in the deck, nothing changed
    AlreadyInDeck,
    /// Deck does not exist
    DeckNotFound,
}

/// Trait for deck store operations
#[async_trait]
pub trait DeckRepository {
    /// Builds a full 52-card deck under the next id
    async fn create_deck(&self) -> Result<Deck, AppError>;

    /// Every deck id in creation order
    async fn list_deck_ids(&self) -> Result<Vec<String>, AppError>;

    async fn deck_exists(&self, deck_id: &str) -> Result<bool, AppError>;

    /// Snapshot of a deck. Later mutations are not reflected in it.
    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>, AppError>;

    /// Atomically removes and returns the card at the front of the deck
    async fn deal_card(&self, deck_id: &str) -> Result<DealCardResult, AppError>;

    /// Atomically checks for a duplicate and appends the card to the end of the deck
    async fn return_card(&self, deck_id: &str, card: Card) -> Result<ReturnCardResult, AppError>;

    /// Uniformly permutes the deck in place. Returns false if the deck does not exist.
    async fn shuffle_deck(&self, deck_id: &str) -> Result<bool, AppError>;
}

/// In-memory deck store
///
/// The map only takes its write lock to insert a new deck. Deal, return and
/// shuffle lock the one deck they touch, so operations on the same deck are
/// serialized while different decks proceed in parallel.
pub struct InMemoryDeckRepository {
    decks: RwLock<HashMap<String, CardPile>>,
    last_id: AtomicU64,
    rng: Mutex<StdRng>,
}

impl Default for InMemoryDeckRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDeckRepository {
    /// Creates an empty store that shuffles with an OS-seeded generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an empty store that shuffles with the given generator
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            decks: RwLock::new(HashMap::new()),
            last_id: AtomicU64::new(0),
            rng: Mutex::new(rng),
        }
    }

    async fn pile(&self, deck_id: &str) -> Option<CardPile> {
        let decks = self.decks.read().await;
        decks.get(deck_id).cloned()
    }
}

#[async_trait]
impl DeckRepository for InMemoryDeckRepository {
    #[instrument(skip(self))]
    async fn create_deck(&self) -> Result<Deck, AppError> {
        let cards = Card::standard_deck();

        // Minted under the write lock so map insertion order follows id order
        let mut decks = self.decks.write().await;
        let deck_id = (self.last_id.fetch_add(1, Ordering::SeqCst) + 1).to_string();
        decks.insert(
            deck_id.clone(),
            Arc::new(Mutex::new(cards.iter().copied().collect())),
        );
        drop(decks);

        info!(deck_id = %deck_id, card_count = cards.len(), "Deck created in memory");
        Ok(Deck::new(deck_id, cards))
    }

    #[instrument(skip(self))]
    async fn list_deck_ids(&self) -> Result<Vec<String>, AppError> {
        let decks = self.decks.read().await;
        let mut deck_ids: Vec<String> = decks.keys().cloned().collect();
        drop(decks);

        deck_ids.sort_by_cached_key(|id| id.parse::<u64>().ok());

        debug!(deck_count = deck_ids.len(), "Deck ids listed from memory");
        Ok(deck_ids)
    }

    #[instrument(skip(self))]
    async fn deck_exists(&self, deck_id: &str) -> Result<bool, AppError> {
        let decks = self.decks.read().await;
        Ok(decks.contains_key(deck_id))
    }

    #[instrument(skip(self))]
    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>, AppError> {
        let Some(pile) = self.pile(deck_id).await else {
            debug!(deck_id = %deck_id, "Deck not found in memory");
            return Ok(None);
        };

        let cards = pile.lock().await.iter().copied().collect::<Vec<_>>();
        debug!(deck_id = %deck_id, card_count = cards.len(), "Deck found in memory");

        Ok(Some(Deck::new(deck_id.to_string(), cards)))
    }

    #[instrument(skip(self))]
    async fn deal_card(&self, deck_id: &str) -> Result<DealCardResult, AppError> {
        let Some(pile) = self.pile(deck_id).await else {
            debug!(deck_id = %deck_id, "Cannot deal, deck not found");
            return Ok(DealCardResult::DeckNotFound);
        };

        let mut cards = pile.lock().await;
        match cards.pop_front() {
            Some(card) => {
                debug!(
                    deck_id = %deck_id,
                    card = %card,
                    remaining = cards.len(),
                    "Card dealt (atomic)"
                );
                Ok(DealCardResult::Dealt(card))
            }
            None => {
                debug!(deck_id = %deck_id, "Cannot deal, deck is empty");
                Ok(DealCardResult::DeckEmpty)
            }
        }
    }

    #[instrument(skip(self))]
    async fn return_card(&self, deck_id: &str, card: Card) -> Result<ReturnCardResult, AppError> {
        let Some(pile) = self.pile(deck_id).await else {
            debug!(deck_id = %deck_id, "Cannot return card, deck not found");
            return Ok(ReturnCardResult::DeckNotFound);
        };

        let mut cards = pile.lock().await;
        if cards.contains(&card) {
            debug!(deck_id = %deck_id, card = %card, "Card already in deck");
            return Ok(ReturnCardResult::AlreadyInDeck);
        }
        cards.push_back(card);

        debug!(
            deck_id = %deck_id,
            card = %card,
            card_count = cards.len(),
            "Card returned (atomic)"
        );
        Ok(ReturnCardResult::Returned)
    }

    #[instrument(skip(self))]
    async fn shuffle_deck(&self, deck_id: &str) -> Result<bool, AppError> {
        let Some(pile) = self.pile(deck_id).await else {
            debug!(deck_id = %deck_id, "Cannot shuffle, deck not found");
            return Ok(false);
        };

        let mut cards = pile.lock().await;
        let mut rng = self.rng.lock().await;
        cards.make_contiguous().shuffle(&mut *rng);

        debug!(deck_id = %deck_id, card_count = cards.len(), "Deck shuffled");
        Ok(true)
    }
}
