use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{LoginRequest, LoginResponse, SignupRequest},
    jwt::JwtKeys,
    services,
};
use crate::{dto::MessageResponse, error::Result, state::AppState};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;
    services::sign_up(state.users.as_ref(), &payload.email, &payload.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(payload) = payload?;
    let user = services::login(state.users.as_ref(), &payload.email, &payload.password).await?;

    let token = JwtKeys::from_ref(&state).issue(user.id, &user.email)?;
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token,
    }))
}
