use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::deck::repository::DeckRepository;

pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error occurred. Please try again later.";
const INVALID_BODY_MESSAGE: &str = "Invalid input - request body is missing or invalid";

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub deck_repository: Arc<dyn DeckRepository + Send + Sync>,
}

impl AppState {
    pub fn new(deck_repository: Arc<dyn DeckRepository + Send + Sync>) -> Self {
        Self { deck_repository }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub error_type: String,
    pub error_message: String,
    pub timestamp: i64, // Milliseconds since the Unix epoch
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(reason = %rejection.body_text(), "Request body rejected");
        AppError::InvalidInput(INVALID_BODY_MESSAGE.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, error_type, error_message) = match self {
            AppError::InvalidInput(msg) => {
                warn!(error_message = %msg, "Rejecting invalid input");
                (StatusCode::BAD_REQUEST, "400 BAD_REQUEST", INVALID_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                warn!(error_message = %msg, "Requested resource not found");
                (StatusCode::NOT_FOUND, "404 NOT_FOUND", RESOURCE_NOT_FOUND, msg)
            }
            AppError::Internal(detail) => {
                error!(detail = %detail, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500 INTERNAL_SERVER_ERROR",
                    INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error_code: error_code.to_string(),
            error_type: error_type.to_string(),
            error_message,
            timestamp: chrono::Utc::now().timestamp_millis(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::deck::repository::{DealCardResult, InMemoryDeckRepository, ReturnCardResult};
    use crate::deck::{Card, Deck};
    use async_trait::async_trait;

    /// Repository whose every call fails - for exercising the 500 path
    pub struct FailingDeckRepository;

    impl FailingDeckRepository {
        fn failure<T>() -> Result<T, AppError> {
            Err(AppError::Internal("deck storage unavailable".to_string()))
        }
    }

    #[async_trait]
    impl DeckRepository for FailingDeckRepository {
        async fn create_deck(&self) -> Result<Deck, AppError> {
            Self::failure()
        }
        async fn list_deck_ids(&self) -> Result<Vec<String>, AppError> {
            Self::failure()
        }
        async fn deck_exists(&self, _deck_id: &str) -> Result<bool, AppError> {
            Self::failure()
        }
        async fn get_deck(&self, _deck_id: &str) -> Result<Option<Deck>, AppError> {
            Self::failure()
        }
        async fn deal_card(&self, _deck_id: &str) -> Result<DealCardResult, AppError> {
            Self::failure()
        }
        async fn return_card(
            &self,
            _deck_id: &str,
            _card: Card,
        ) -> Result<ReturnCardResult, AppError> {
            Self::failure()
        }
        async fn shuffle_deck(&self, _deck_id: &str) -> Result<bool, AppError> {
            Self::failure()
        }
    }

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        deck_repository: Option<Arc<dyn DeckRepository + Send + Sync>>,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                deck_repository: None,
            }
        }

        pub fn with_deck_repository(mut self, repo: Arc<dyn DeckRepository + Send + Sync>) -> Self {
            self.deck_repository = Some(repo);
            self
        }

        pub fn build(self) -> AppState {
            AppState {
                deck_repository: self
                    .deck_repository
                    .unwrap_or_else(|| Arc::new(InMemoryDeckRepository::new())),
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
