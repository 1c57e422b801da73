use serde::{Deserialize, Serialize};

use crate::models::game::{Game, GameResult, PlayerSymbol};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /games`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub message: String,
    pub game_id: String,
    pub join_code: String,
    pub game_url: String,
    pub game: Game,
}

/// `GET /games/{joinCode}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub game: Game,
}

/// `POST /games/{joinCode}/join`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGameResponse {
    pub message: String,
    pub player_symbol: PlayerSymbol,
    pub player_id: String,
    pub game: Game,
}

/// `POST /games/{joinCode}/move`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub message: String,
    pub game: Game,
    pub result: Option<GameResult>,
    pub result_message: String,
}
