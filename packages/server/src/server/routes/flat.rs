use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::Role;
use crate::domains::flat::{create_flat, update_flat_status, Flat, FlatPayload, UpdateStatusPayload};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::{Authentication, RequestId};

#[derive(Debug, Serialize, Deserialize)]
pub struct FlatResponse {
    pub flat: Flat,
}

/// POST /flat/create: the new flat always starts in `created`
pub async fn create_flat_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(request_id): Extension<RequestId>,
    Extension(auth): Extension<Authentication>,
    payload: Result<Json<FlatPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Flat>), ApiError> {
    request_id
        .scope(async {
            auth.require_role(&[Role::Moderator, Role::Client])?;
            let Json(payload) = payload?;

            let new_flat = payload.validate(&state.deps.validator)?;
            let flat = create_flat(new_flat, &state.deps).await?;

            Ok::<_, ApiError>((StatusCode::CREATED, Json(flat)))
        })
        .await
}

/// POST /flat/update (moderators only)
pub async fn update_flat_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(request_id): Extension<RequestId>,
    Extension(auth): Extension<Authentication>,
    payload: Result<Json<UpdateStatusPayload>, JsonRejection>,
) -> Result<Json<FlatResponse>, ApiError> {
    request_id
        .scope(async {
            let actor = auth.require_role(&[Role::Moderator])?;
            let Json(payload) = payload?;

            let desired = payload.desired_status()?;
            let flat = update_flat_status(actor.user_id, payload.id, desired, &state.deps).await?;

            Ok::<_, ApiError>(Json(FlatResponse { flat }))
        })
        .await
}
