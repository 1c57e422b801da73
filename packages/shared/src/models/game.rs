use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::board::Board;
use crate::services::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSymbol {
    X,
    O,
}

impl PlayerSymbol {
    /// The other symbol; flipping twice returns the original.
    pub fn other(self) -> Self {
        match self {
            PlayerSymbol::X => PlayerSymbol::O,
            PlayerSymbol::O => PlayerSymbol::X,
        }
    }
}

impl std::fmt::Display for PlayerSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSymbol::X => write!(f, "X"),
            PlayerSymbol::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Active,
    Finished,
}

/// Terminal outcome of a finished game. An in-progress game has no
/// `GameResult`; handlers carry that as `Option<GameResult>` / JSON null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    X,
    O,
    #[serde(rename = "draw")]
    Draw,
}

impl From<PlayerSymbol> for GameResult {
    fn from(symbol: PlayerSymbol) -> Self {
        match symbol {
            PlayerSymbol::X => GameResult::X,
            PlayerSymbol::O => GameResult::O,
        }
    }
}

/// A persisted game record, one DynamoDB item. Attribute names are
/// camelCase so the stored shape is exactly the shape every endpoint
/// returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub join_code: String,
    pub board: Board,
    pub current_turn: PlayerSymbol,
    pub status: GameStatus,
    pub winner: Option<GameResult>,
    pub player_x_id: Option<String>,
    pub player_o_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// A fresh game: waiting for players, empty board, X to move first.
    pub fn new() -> Self {
        let now = Utc::now();
        Game {
            id: Uuid::new_v4().to_string(),
            join_code: rules::generate_join_code(),
            board: Board::empty(),
            current_turn: PlayerSymbol::X,
            status: GameStatus::Waiting,
            winner: None,
            player_x_id: None,
            player_o_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Both seats taken.
    pub fn is_full(&self) -> bool {
        self.player_x_id.is_some() && self.player_o_id.is_some()
    }

    /// The symbol `player_id` plays as, if they are seated in this game.
    pub fn symbol_of(&self, player_id: &str) -> Option<PlayerSymbol> {
        if self.player_x_id.as_deref() == Some(player_id) {
            Some(PlayerSymbol::X)
        } else if self.player_o_id.as_deref() == Some(player_id) {
            Some(PlayerSymbol::O)
        } else {
            None
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
