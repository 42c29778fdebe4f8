use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn supplied_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

/// Request correlation middleware - echoes X-Request-ID, generating one when absent.
/// Usage: .layer(middleware::from_fn(middleware::request_id))
/// Everything logged while handling the request carries the id in its span.
pub async fn request_id(req: Request, next: Next) -> Response {
    let request_id =
        supplied_request_id(req.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        uri = %req.uri(),
    );

    async move {
        info!("Received request");

        let mut response = next.run(req).await;
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        info!(status = %response.status(), "Sending response");
        response
    }
    .instrument(span)
    .await
}
