use axum::{routing::get, Router};
use lambda_http::{run, tracing, Error};
use std::env::set_var;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod routes;
pub mod state;

use shared::repositories::game_repository::DynamoDbGameRepository;
use shared::services::game_service::GameService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    // Set up services
    let config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&config);

    let game_repository = Arc::new(DynamoDbGameRepository::new(client));
    let game_service = Arc::new(GameService::new(game_repository));

    let app_state = state::AppState { game_service };

    // The browser client polls from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::games::routes())
        .layer(cors)
        .with_state(app_state);

    run(app).await
}
