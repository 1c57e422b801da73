use serde::{Deserialize, Serialize};

/// Body of `POST /games/{joinCode}/move`. `position` stays signed so a
/// negative index is rejected as an invalid position rather than a
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub position: i32,
    pub player_id: String,
}

impl MoveRequest {
    pub fn new(position: i32, player_id: String) -> Self {
        MoveRequest {
            position,
            player_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_request_uses_camel_case_player_id() {
        let request: MoveRequest =
            serde_json::from_str(r#"{"position":4,"playerId":"uuid-player1"}"#).unwrap();

        assert_eq!(request.position, 4);
        assert_eq!(request.player_id, "uuid-player1");
    }

    #[test]
    fn test_move_request_accepts_negative_position() {
        let request: MoveRequest =
            serde_json::from_str(r#"{"position":-1,"playerId":"p"}"#).unwrap();

        assert_eq!(request.position, -1);
    }
}
