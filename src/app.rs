use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{deck, middleware::request_id, shared::AppState};

pub const DECKS_BASE_PATH: &str = "/api/cards-service/decks";

/// Builds the HTTP router with every deck route mounted under the base path
pub fn router(app_state: AppState) -> Router {
    let decks = Router::new()
        .route("/", get(deck::list_decks))
        .route("/new", get(deck::create_deck))
        .route("/:deck_id", get(deck::get_deck))
        .route("/:deck_id/deal", get(deck::deal_card))
        .route("/:deck_id/shuffle", get(deck::shuffle_deck))
        .route("/:deck_id/cards", post(deck::return_card));

    Router::new()
        .nest(DECKS_BASE_PATH, decks)
        .layer(middleware::from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
