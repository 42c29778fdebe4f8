//! Test setup - drives the real router in-process through `oneshot`
#![allow(dead_code)] // Test utilities may not all be used in every test

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use rand::{rngs::StdRng, SeedableRng};
use tower::ServiceExt; // for `oneshot`

use card_deck_service::{router, AppState, InMemoryDeckRepository, DECKS_BASE_PATH};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

pub struct TestApp {
    pub app: Router,
    pub repository: Arc<InMemoryDeckRepository>,
}

pub struct TestAppBuilder {
    seed: Option<u64>,
    decks: usize,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            seed: None,
            decks: 0,
        }
    }

    /// Shuffle with a seeded generator instead of OS randomness
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create this many decks through the API before handing the app out
    pub fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    pub async fn build(self) -> TestApp {
        let repository = Arc::new(match self.seed {
            Some(seed) => InMemoryDeckRepository::with_rng(StdRng::seed_from_u64(seed)),
            None => InMemoryDeckRepository::new(),
        });
        let app = router(AppState::new(repository.clone()));
        let test_app = TestApp { app, repository };

        for _ in 0..self.decks {
            let response = test_app.get("/new").await;
            assert_eq!(response.status, StatusCode::CREATED);
        }

        test_app
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// GET a path relative to the decks base path
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(format!("{DECKS_BASE_PATH}{path}"))
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn get_with_request_id(&self, path: &str, request_id: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(format!("{DECKS_BASE_PATH}{path}"))
            .header("X-Request-ID", request_id)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST a raw JSON body to a path relative to the decks base path
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(format!("{DECKS_BASE_PATH}{path}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn return_card(&self, deck_id: &str, suit: &str, rank: &str) -> TestResponse {
        let body = serde_json::json!({ "suit": suit, "rank": rank }).to_string();
        self.post_json(&format!("/{deck_id}/cards"), &body).await
    }
}
