use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use super::services;
use crate::{
    auth::extractors::AuthUser, dto::MessageResponse, error::Result, state::AppState,
};

pub fn registration_routes() -> Router<AppState> {
    Router::new().route(
        "/events/:id/attendees",
        post(register_for_event).delete(cancel_registration),
    )
}

#[instrument(skip(state, id))]
pub async fn register_for_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let Path(event_id) = id?;
    services::register(
        state.events.as_ref(),
        state.registrations.as_ref(),
        event_id,
        user_id,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registered for event successfully")),
    ))
}

#[instrument(skip(state, id))]
pub async fn cancel_registration(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    let Path(event_id) = id?;
    services::cancel_registration(state.registrations.as_ref(), event_id, user_id).await?;
    Ok(Json(MessageResponse::new("Registration cancelled successfully")))
}
