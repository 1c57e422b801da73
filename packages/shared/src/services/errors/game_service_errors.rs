use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[derive(Debug)]
pub enum GameServiceError {
    /// No game matches the join code.
    GameNotFound,
    /// Both player slots are already taken.
    GameFull,
    /// The game already finished; nobody can join it.
    GameEnded,
    /// Moves are only accepted while the game is active.
    GameNotActive,
    /// The mover's id matches neither seat.
    InvalidPlayer,
    /// Cell occupied or not the mover's turn.
    InvalidMove,
    /// Position outside 0-8.
    InvalidPosition,
    /// Every generated join code collided with an existing game.
    JoinCodeExhausted,
    RepositoryError(GameRepositoryError),
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::GameNotFound => write!(f, "Game not found"),
            GameServiceError::GameFull => write!(f, "Game is full"),
            GameServiceError::GameEnded => write!(f, "Game has ended"),
            GameServiceError::GameNotActive => write!(f, "Game is not active"),
            GameServiceError::InvalidPlayer => write!(f, "Invalid player"),
            GameServiceError::InvalidMove => write!(f, "Invalid move"),
            GameServiceError::InvalidPosition => write!(f, "Invalid position"),
            GameServiceError::JoinCodeExhausted => {
                write!(f, "Failed to allocate a unique join code")
            }
            GameServiceError::RepositoryError(err) => write!(f, "Repository error: {}", err),
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<GameRepositoryError> for GameServiceError {
    fn from(err: GameRepositoryError) -> Self {
        GameServiceError::RepositoryError(err)
    }
}
