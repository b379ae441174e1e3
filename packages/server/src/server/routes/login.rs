use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::common::{AuthError, Role, UserId};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub struct DummyLoginQuery {
    pub user_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Development login: issues a token for a fresh random user in the
/// requested role.
pub async fn dummy_login_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<DummyLoginQuery>, QueryRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    request_id
        .scope(async {
            let Query(query) = query?;
            let role: Role = query.user_type.parse()?;
            let user_id = UserId::new();

            let token = state
                .deps
                .jwt_service
                .create_token(user_id, role)
                .map_err(AuthError::from)?;

            info!(user_id = %user_id, role = %role, "Issued development token");
            Ok::<_, ApiError>(Json(TokenResponse { token }))
        })
        .await
}
