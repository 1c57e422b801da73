use crate::models::game::Game;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_attribute_value, to_item};

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbGameRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbGameRepository {
    pub fn new(client: Client) -> Self {
        let table_name = std::env::var("GAMES_TABLE")
            .expect("GAMES_TABLE environment variable must be set");
        Self { client, table_name }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError>;

    async fn get_game_by_join_code(
        &self,
        join_code: &str,
    ) -> Result<Option<Game>, GameRepositoryError>;

    async fn update_game(&self, game: &Game) -> Result<(), GameRepositoryError>;
}

#[async_trait]
impl GameRepository for DynamoDbGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let item = to_item(game).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn get_game_by_join_code(
        &self,
        join_code: &str,
    ) -> Result<Option<Game>, GameRepositoryError> {
        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("GSI_GameByJoinCode")
            .key_condition_expression("joinCode = :joinCode")
            .expression_attribute_values(
                ":joinCode",
                to_attribute_value(join_code)
                    .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        if let Some(item) = output.items.and_then(|items| items.into_iter().next()) {
            let game: Game =
                from_item(item).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;
            Ok(Some(game))
        } else {
            Ok(None)
        }
    }

    async fn update_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let item = to_item(game).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;

        // Updates must land on an existing row; a rejected operation never
        // inserts a new one.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(id)")
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }
}
