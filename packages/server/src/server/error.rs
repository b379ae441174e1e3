//! HTTP error mapping.
//!
//! Every handler returns `Result<_, ApiError>`. Domain errors convert into an
//! `ApiError` carrying the status code; the body always has the shape
//! `{"message": ..., "request_id": ..., "code": <status>}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{header::RETRY_AFTER, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::common::{AuthError, ValidationError};
use crate::domains::flat::FlatError;
use crate::domains::house::HouseError;

/// Seconds a client should wait before retrying after a store failure.
const STORE_RETRY_AFTER_SECS: u64 = 30;

const STORE_FAILURE_MESSAGE: &str = "temporary storage failure, try again later";

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    request_id: Option<String>,
    retry_after: Option<u64>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    request_id: Option<&'a str>,
    code: u16,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            request_id: None,
            retry_after: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Opaque 500 for storage failures; the cause is logged where it happened.
    pub fn store_failure() -> Self {
        Self {
            retry_after: Some(STORE_RETRY_AFTER_SECS),
            ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, STORE_FAILURE_MESSAGE)
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn retry_after(&self) -> Option<u64> {
        self.retry_after
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: &self.message,
            request_id: self.request_id.as_deref(),
            code: self.status.as_u16(),
        };
        let mut response = (self.status, Json(body)).into_response();

        if let Some(secs) = self.retry_after {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(secs));
        }

        response
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<FlatError> for ApiError {
    fn from(err: FlatError) -> Self {
        match err {
            FlatError::Validation(e) => e.into(),
            FlatError::Transition(message) => Self::new(StatusCode::CONFLICT, message),
            FlatError::Authorization(message) => Self::new(StatusCode::FORBIDDEN, message),
            e @ FlatError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            FlatError::Store(_) => Self::store_failure(),
        }
    }
}

impl From<HouseError> for ApiError {
    fn from(err: HouseError) -> Self {
        match err {
            HouseError::Validation(e) => e.into(),
            HouseError::Store(_) => Self::store_failure(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationRequired | AuthError::InvalidToken => {
                Self::new(StatusCode::UNAUTHORIZED, err.to_string())
            }
            AuthError::UnknownRole(_) => Self::bad_request(err.to_string()),
            AuthError::Forbidden(_) => Self::new(StatusCode::FORBIDDEN, err.to_string()),
            AuthError::InternalError(e) => {
                error!(error = %e, "Role gate failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}
