use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{dto::EventRequest, repo_types::Event, services};
use crate::{
    auth::extractors::AuthUser, dto::MessageResponse, error::Result, state::AppState,
};

pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
}

#[instrument(skip(state))]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>> {
    Ok(Json(services::list_events(state.events.as_ref()).await?))
}

#[instrument(skip(state, id))]
pub async fn get_event(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Event>> {
    let Path(id) = id?;
    Ok(Json(services::get_event(state.events.as_ref(), id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: std::result::Result<Json<EventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>)> {
    let Json(payload) = payload?;
    let event =
        services::create_event(state.events.as_ref(), payload.into_fields()?, user_id).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[instrument(skip(state, id, payload))]
pub async fn update_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<Event>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let event =
        services::update_event(state.events.as_ref(), id, payload.into_fields()?, user_id).await?;
    Ok(Json(event))
}

#[instrument(skip(state, id))]
pub async fn delete_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    let Path(id) = id?;
    services::delete_event(state.events.as_ref(), id, user_id).await?;
    Ok(Json(MessageResponse::new("Event deleted")))
}
