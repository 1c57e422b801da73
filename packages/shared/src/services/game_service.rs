use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    models::game::{Game, GameResult, GameStatus, PlayerSymbol},
    repositories::game_repository::GameRepository,
    services::errors::game_service_errors::GameServiceError,
    services::rules,
};

/// Random codes collide about once in 36^6 pairs; a handful of retries is
/// plenty before giving up.
const JOIN_CODE_ATTEMPTS: usize = 5;

/// Outcome of a successful join: the seat taken, the minted player id, and
/// the updated record.
#[derive(Debug, Clone)]
pub struct JoinedGame {
    pub player_symbol: PlayerSymbol,
    pub player_id: String,
    pub game: Game,
}

/// Outcome of an accepted move.
#[derive(Debug, Clone)]
pub struct MovedGame {
    pub game: Game,
    pub result: Option<GameResult>,
}

/// The game lifecycle (waiting -> active -> finished) over a persisted
/// record. Stateless: every call reloads the game from the repository, so
/// any number of instances can serve requests.
#[derive(Clone)]
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        GameService { repository }
    }

    /// Create a waiting game with a join code no existing game uses.
    /// Generation is uniform random, so collisions are possible; regenerate
    /// and retry a bounded number of times before reporting failure.
    pub async fn create_game(&self) -> Result<Game, GameServiceError> {
        for _ in 0..JOIN_CODE_ATTEMPTS {
            let game = Game::new();
            if self
                .repository
                .get_game_by_join_code(&game.join_code)
                .await?
                .is_some()
            {
                tracing::warn!("Join code collision on {}, regenerating", game.join_code);
                continue;
            }
            self.repository.create_game(&game).await?;
            return Ok(game);
        }
        Err(GameServiceError::JoinCodeExhausted)
    }

    pub async fn get_game(&self, join_code: &str) -> Result<Game, GameServiceError> {
        self.find_game(join_code).await
    }

    /// Seat a new player. X is assigned first, then O; seating O starts the
    /// game. A full or finished game rejects the join without mutation.
    pub async fn join_game(&self, join_code: &str) -> Result<JoinedGame, GameServiceError> {
        let mut game = self.find_game(join_code).await?;

        if game.is_full() {
            return Err(GameServiceError::GameFull);
        }
        if game.status == GameStatus::Finished {
            return Err(GameServiceError::GameEnded);
        }

        let player_id = Uuid::new_v4().to_string();
        let player_symbol = if game.player_x_id.is_none() {
            game.player_x_id = Some(player_id.clone());
            PlayerSymbol::X
        } else {
            game.player_o_id = Some(player_id.clone());
            game.status = GameStatus::Active;
            PlayerSymbol::O
        };
        game.updated_at = Utc::now();

        self.repository.update_game(&game).await?;

        Ok(JoinedGame {
            player_symbol,
            player_id,
            game,
        })
    }

    /// Apply one move for `player_id`. On acceptance the board gains the
    /// mover's symbol, the turn flips, and a terminal board fixes the
    /// status and winner. Any rejection leaves the stored record untouched.
    pub async fn make_move(
        &self,
        join_code: &str,
        position: i32,
        player_id: &str,
    ) -> Result<MovedGame, GameServiceError> {
        // Range check comes before any store access.
        if !(0..=8).contains(&position) {
            return Err(GameServiceError::InvalidPosition);
        }
        let position = position as usize;

        let mut game = self.find_game(join_code).await?;

        if game.status != GameStatus::Active {
            return Err(GameServiceError::GameNotActive);
        }

        let player_symbol = game
            .symbol_of(player_id)
            .ok_or(GameServiceError::InvalidPlayer)?;

        if !rules::can_make_move(&game.board, position, game.current_turn, player_symbol) {
            return Err(GameServiceError::InvalidMove);
        }

        game.board = game.board.with_move(position, player_symbol);
        game.current_turn = game.current_turn.other();

        let result = rules::check_game_result(&game.board);
        if let Some(result) = result {
            game.status = GameStatus::Finished;
            game.winner = Some(result);
        }
        game.updated_at = Utc::now();

        self.repository.update_game(&game).await?;

        Ok(MovedGame { game, result })
    }

    async fn find_game(&self, join_code: &str) -> Result<Game, GameServiceError> {
        // Malformed codes cannot match any stored game; skip the lookup.
        if !rules::is_valid_join_code(join_code) {
            return Err(GameServiceError::GameNotFound);
        }
        self.repository
            .get_game_by_join_code(join_code)
            .await?
            .ok_or(GameServiceError::GameNotFound)
    }
}
