use serde::{Deserialize, Serialize};

use db::models::PictureWithRelations;

use super::{GameSummary, PlayerResponse};

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct PictureResponse {
    pub id: i32,
    pub image: Option<String>,
    pub game: GameSummary,
    pub player: PlayerResponse,
}

impl From<PictureWithRelations> for PictureResponse {
    fn from((picture, game, player): PictureWithRelations) -> Self {
        PictureResponse {
            id: picture.id,
            image: picture.image,
            game: game.into(),
            player: player.into(),
        }
    }
}
