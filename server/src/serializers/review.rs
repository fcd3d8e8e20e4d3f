use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::models::ReviewWithRelations;

use super::{GameSummary, PlayerResponse};

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub review: String,
    pub date: DateTime<Utc>,
    pub game: GameSummary,
    pub player: PlayerResponse,
}

impl From<ReviewWithRelations> for ReviewResponse {
    fn from((review, game, player): ReviewWithRelations) -> Self {
        ReviewResponse {
            id: review.id,
            review: review.review,
            date: review.date,
            game: game.into(),
            player: player.into(),
        }
    }
}
