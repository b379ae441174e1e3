use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::{HouseId, Role, ValidationError};
use crate::domains::flat::Flat;
use crate::domains::house::{
    add_subscription, create_house, get_house_flats, House, HousePayload, SubscribePayload,
};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::{Authentication, RequestId};

#[derive(Debug, Serialize, Deserialize)]
pub struct FlatsResponse {
    pub flats: Vec<Flat>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub message: String,
    pub request_id: String,
    pub code: u16,
}

fn parse_house_id(path: Result<Path<String>, PathRejection>) -> Result<HouseId, ApiError> {
    let Path(raw) = path?;
    HouseId::parse(&raw)
        .map_err(|_| ValidationError::new("id", format!("'{}' is not a valid house id", raw)).into())
}

/// POST /house/create (moderators only)
pub async fn create_house_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(request_id): Extension<RequestId>,
    Extension(auth): Extension<Authentication>,
    payload: Result<Json<HousePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<House>), ApiError> {
    request_id
        .scope(async {
            auth.require_role(&[Role::Moderator])?;
            let Json(payload) = payload?;

            let new_house = payload.validate(&state.deps.validator)?;
            let house = create_house(new_house, &state.deps).await?;

            Ok::<_, ApiError>((StatusCode::CREATED, Json(house)))
        })
        .await
}

/// GET /house/{id}: moderators see every flat, clients only approved ones
pub async fn get_house_flats_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(request_id): Extension<RequestId>,
    Extension(auth): Extension<Authentication>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<FlatsResponse>, ApiError> {
    request_id
        .scope(async {
            let actor = auth.require_role(&[Role::Moderator, Role::Client])?;
            let house_id = parse_house_id(path)?;

            let flats = get_house_flats(house_id, actor.role, &state.deps).await?;

            Ok::<_, ApiError>(Json(FlatsResponse { flats }))
        })
        .await
}

/// POST /house/{id}/subscribe
pub async fn subscribe_house_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(request_id): Extension<RequestId>,
    Extension(auth): Extension<Authentication>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<SubscribePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<SubscriptionResponse>), ApiError> {
    request_id
        .scope(async {
            auth.require_role(&[Role::Moderator, Role::Client])?;
            let house_id = parse_house_id(path)?;
            let Json(payload) = payload?;

            let email = payload.validate(&state.deps.validator)?;
            add_subscription(house_id, email, &state.deps).await?;

            Ok::<_, ApiError>((
                StatusCode::CREATED,
                Json(SubscriptionResponse {
                    message: "Subscription successful".to_string(),
                    request_id: request_id.as_str().to_string(),
                    code: StatusCode::CREATED.as_u16(),
                }),
            ))
        })
        .await
}
