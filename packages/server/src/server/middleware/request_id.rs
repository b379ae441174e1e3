use std::future::Future;

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::server::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request identifier: lowercase hex, no dashes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Run a handler body, stamping any error it returns with this id.
    pub async fn scope<T, F>(&self, handler: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        handler
            .await
            .map_err(|e| e.with_request_id(self.0.clone()))
    }
}

/// Assigns a request id, records it on the tracing span and echoes it back in
/// the `X-Request-Id` response header.
///
/// The timeout layer answers with an empty 408; it is rewritten here into the
/// usual error body.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::generate();
    request.extensions_mut().insert(request_id.clone());

    let span = info_span!(
        "request",
        request_id = %request_id.as_str(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span.clone()).await;

    if response.status() == StatusCode::REQUEST_TIMEOUT {
        span.in_scope(|| tracing::warn!("Request timed out"));
        response = ApiError::new(StatusCode::REQUEST_TIMEOUT, "request timed out")
            .with_request_id(request_id.as_str())
            .into_response();
    }

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, middleware, routing::get, Router};
    use std::time::Duration;
    use tower::ServiceExt;
    use tower_http::timeout::TimeoutLayer;

    #[test]
    fn test_generated_ids_are_lowercase_hex() {
        let id = RequestId::generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_ne!(id, RequestId::generate());
    }

    #[tokio::test]
    async fn test_timeout_gets_error_body() {
        let app = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(TimeoutLayer::new(Duration::from_millis(50)))
            .layer(middleware::from_fn(request_id_middleware));

        let response = app
            .oneshot(HttpRequest::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let header_id = response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .unwrap()
            .to_string();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["code"], 408);
        assert_eq!(json["message"], "request timed out");
        assert_eq!(json["request_id"], header_id.as_str());
    }

    #[tokio::test]
    async fn test_scope_stamps_errors() {
        let id = RequestId::generate();
        let result: Result<(), ApiError> = id
            .scope(async { Err(ApiError::new(StatusCode::CONFLICT, "nope")) })
            .await;

        let response = axum::response::IntoResponse::into_response(result.unwrap_err());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["request_id"], id.as_str());
        assert_eq!(json["code"], 409);
        assert_eq!(json["message"], "nope");
    }
}
