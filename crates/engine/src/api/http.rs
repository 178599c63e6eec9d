//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use minefield_domain::{Game, GameId};

use crate::app::App;
use crate::use_cases::GameError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/games", post(create_game))
        .route("/games/{id}", get(get_game))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Games
// =============================================================================

/// Body of `POST /games`. Missing board fields fall back to the app defaults.
#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub bombs: Option<u32>,
}

async fn create_game(
    State(app): State<Arc<App>>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let size = request.size.unwrap_or(app.board_defaults.size);
    let bombs = request.bombs.unwrap_or(app.board_defaults.bomb_count);

    let game = app.use_cases.game.create(request.name, size, bombs).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

async fn get_game(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Game>, ApiError> {
    let game = app.use_cases.game.get(&GameId::new(id)).await?;
    Ok(Json(game))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<GameError> for ApiError {
    fn from(e: GameError) -> Self {
        match e {
            GameError::InvalidInput(msg) => ApiError::BadRequest(msg),
            GameError::NotFound { id } => ApiError::NotFound(format!("Game not found: {id}")),
            // Only the context goes over the wire; the storage detail stays in logs.
            GameError::Persistence { context, .. } => ApiError::Internal(context.to_string()),
        }
    }
}
