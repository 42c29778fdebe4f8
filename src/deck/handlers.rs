use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{cards::Card, models::Deck, service::DeckService, types::CardRequest};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> DeckService {
    DeckService::new(Arc::clone(&state.deck_repository))
}

/// HTTP handler for listing deck ids
///
/// GET /api/cards-service/decks
/// Returns 404 while no deck has been created
#[instrument(name = "list_decks", skip(state))]
pub async fn list_decks(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let deck_ids = service(&state).list_deck_ids().await?;

    info!(deck_count = deck_ids.len(), "Deck ids listed successfully");
    Ok(Json(deck_ids))
}

/// HTTP handler for creating a new deck
///
/// GET /api/cards-service/decks/new
/// Returns 201 with the full 52-card deck
#[instrument(name = "create_deck", skip(state))]
pub async fn create_deck(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Deck>), AppError> {
    let deck = service(&state).create_deck().await?;

    info!(deck_id = %deck.id, card_count = deck.len(), "Deck created successfully");
    Ok((StatusCode::CREATED, Json(deck)))
}

/// GET /api/cards-service/decks/{deck_id}
#[instrument(name = "get_deck", skip(state))]
pub async fn get_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<Deck>, AppError> {
    let deck = service(&state).get_deck(&deck_id).await?;
    Ok(Json(deck))
}

/// GET /api/cards-service/decks/{deck_id}/deal
#[instrument(name = "deal_card", skip(state))]
pub async fn deal_card(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<Card>, AppError> {
    let card = service(&state).deal_card(&deck_id).await?;

    info!(deck_id = %deck_id, card = %card, "Card dealt successfully");
    Ok(Json(card))
}

/// GET /api/cards-service/decks/{deck_id}/shuffle
#[instrument(name = "shuffle_deck", skip(state))]
pub async fn shuffle_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service(&state).shuffle_deck(&deck_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// HTTP handler for returning a card to a deck
///
/// POST /api/cards-service/decks/{deck_id}/cards
/// Body: {"suit": "Hearts", "rank": "Ace"}. A JSON `null` body counts as a
/// missing card, anything unparseable is rejected as an invalid body.
#[instrument(name = "return_card", skip(state, payload))]
pub async fn return_card(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    payload: Result<Json<Option<CardRequest>>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(card) = payload?;
    info!(deck_id = %deck_id, card = ?card, "Returning card to deck");

    service(&state).return_card(&deck_id, card).await?;
    Ok(StatusCode::NO_CONTENT)
}
