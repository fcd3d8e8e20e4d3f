use serde::{Deserialize, Serialize};

use db::models::RatingWithRelations;

use super::{GameSummary, PlayerResponse};

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct RatingResponse {
    pub id: i32,
    pub rating: i32,
    pub game: GameSummary,
    pub player: PlayerResponse,
}

impl From<RatingWithRelations> for RatingResponse {
    fn from((rating, game, player): RatingWithRelations) -> Self {
        RatingResponse {
            id: rating.id,
            rating: rating.rating,
            game: game.into(),
            player: player.into(),
        }
    }
}
