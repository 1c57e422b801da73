use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::move_request::MoveRequest;
use shared::models::responses::{
    CreateGameResponse, GameResponse, JoinGameResponse, MoveResponse,
};
use shared::services::rules;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", post(create_game))
        .route("/games/{join_code}", get(get_game))
        .route("/games/{join_code}/join", post(join_game))
        .route("/games/{join_code}/move", post(make_move))
}

/// Base URL used to build the shareable game link.
fn app_url() -> String {
    std::env::var("APP_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

async fn create_game(
    State(state): State<AppState>,
) -> Result<Json<CreateGameResponse>, ApiError> {
    let game = state.game_service.create_game().await.map_err(|e| {
        error!("Failed to create game: {}", e);
        ApiError::from(e)
    })?;

    debug!("Game created with join code {}", game.join_code);
    let game_url = format!("{}/game/{}", app_url(), game.join_code);

    Ok(Json(CreateGameResponse {
        message: format!(
            "Game created! Share this code: {} or link: {}",
            game.join_code, game_url
        ),
        game_id: game.id.clone(),
        join_code: game.join_code.clone(),
        game_url,
        game,
    }))
}

async fn get_game(
    State(state): State<AppState>,
    Path(join_code): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state
        .game_service
        .get_game(&join_code)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(GameResponse { game }))
}

async fn join_game(
    State(state): State<AppState>,
    Path(join_code): Path<String>,
) -> Result<Json<JoinGameResponse>, ApiError> {
    let joined = state.game_service.join_game(&join_code).await.map_err(|e| {
        debug!("Join rejected for {}: {}", join_code, e);
        ApiError::from(e)
    })?;

    Ok(Json(JoinGameResponse {
        message: format!("You joined as Player {}", joined.player_symbol),
        player_symbol: joined.player_symbol,
        player_id: joined.player_id,
        game: joined.game,
    }))
}

async fn make_move(
    State(state): State<AppState>,
    Path(join_code): Path<String>,
    Json(payload): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let moved = state
        .game_service
        .make_move(&join_code, payload.position, &payload.player_id)
        .await
        .map_err(|e| {
            debug!("Move rejected for {}: {}", join_code, e);
            ApiError::from(e)
        })?;

    Ok(Json(MoveResponse {
        message: "Move successful".to_string(),
        result_message: rules::result_message(moved.result),
        result: moved.result,
        game: moved.game,
    }))
}
