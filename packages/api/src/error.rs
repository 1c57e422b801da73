use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::responses::ErrorResponse;
use shared::services::errors::game_service_errors::GameServiceError;

#[derive(Debug)]
pub enum ApiError {
    GameService(GameServiceError),
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::GameService(error) = self;

        let status = match error {
            GameServiceError::GameNotFound => StatusCode::NOT_FOUND,
            GameServiceError::InvalidPlayer => StatusCode::FORBIDDEN,
            GameServiceError::GameFull
            | GameServiceError::GameEnded
            | GameServiceError::GameNotActive
            | GameServiceError::InvalidMove
            | GameServiceError::InvalidPosition => StatusCode::BAD_REQUEST,
            GameServiceError::JoinCodeExhausted | GameServiceError::RepositoryError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
        });

        (status, body).into_response()
    }
}
