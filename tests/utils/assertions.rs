//! Test assertion helpers - fluent API for verifying responses
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use card_deck_service::{Card, Deck, ErrorResponse};

use super::setup::TestResponse;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct ResponseAssertion<'a> {
    response: &'a TestResponse,
}

impl<'a> ResponseAssertion<'a> {
    pub fn of(response: &'a TestResponse) -> Self {
        Self { response }
    }

    pub fn has_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.response.status,
            expected,
            "unexpected status, body: {}",
            String::from_utf8_lossy(&self.response.body)
        );
        self
    }

    pub fn has_request_id(self, expected: &str) -> Self {
        let actual = self
            .response
            .headers
            .get("x-request-id")
            .expect("response should carry X-Request-ID");
        assert_eq!(actual, expected);
        self
    }

    pub fn has_empty_body(self) -> Self {
        assert!(
            self.response.body.is_empty(),
            "expected no body, got: {}",
            String::from_utf8_lossy(&self.response.body)
        );
        self
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.response.body).unwrap()
    }

    pub fn deck(self) -> Deck {
        self.json()
    }

    pub fn card(self) -> Card {
        self.json()
    }

    pub fn deck_ids(self) -> Vec<String> {
        self.json()
    }

    /// Checks the error body shape and returns its message
    pub fn error(self, expected_type: &str) -> String {
        let error: ErrorResponse = self.json();
        assert_eq!(error.error_type, expected_type);
        assert_eq!(
            error.error_code,
            format!(
                "{} {}",
                self.response.status.as_u16(),
                self.response
                    .status
                    .canonical_reason()
                    .unwrap_or_default()
                    .to_uppercase()
                    .replace(' ', "_")
            )
        );
        assert!(error.timestamp > 0);
        error.error_message
    }
}
