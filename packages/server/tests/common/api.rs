//! HTTP client for integration testing.
//!
//! Drives the full axum router in-process with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use rent_core::common::{Role, UserId};
use rent_core::domains::auth::JwtService;
use rent_core::kernel::ServerDeps;
use rent_core::server::build_app;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct ApiClient {
    router: Router,
    jwt_service: Arc<JwtService>,
}

#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl ApiResponse {
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
    }
}

impl ApiClient {
    pub fn new(deps: ServerDeps) -> Self {
        let jwt_service = deps.jwt_service.clone();
        Self {
            router: build_app(deps, &[]),
            jwt_service,
        }
    }

    /// Mint a token for a fresh user in `role`.
    pub fn login(&self, role: Role) -> (UserId, String) {
        let user_id = UserId::new();
        let token = self
            .jwt_service
            .create_token(user_id, role)
            .expect("Failed to create test token");
        (user_id, token)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> ApiResponse {
        self.send(Method::GET, path, token, None).await
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: Value) -> ApiResponse {
        self.send(Method::POST, path, token, Some(body.to_string()))
            .await
    }

    /// POST with a raw, possibly malformed, body.
    pub async fn post_raw(&self, path: &str, token: Option<&str>, body: &str) -> ApiResponse {
        self.send(Method::POST, path, token, Some(body.to_string()))
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<String>,
    ) -> ApiResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        ApiResponse {
            status,
            headers,
            body,
        }
    }
}
