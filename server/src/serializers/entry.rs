use serde::{Deserialize, Serialize};

use db::models::EntryWithRelations;

use super::{GameSummary, PlayerResponse};

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct EntryResponse {
    pub id: i32,
    pub entry: String,
    pub game: GameSummary,
    pub player: PlayerResponse,
}

impl From<EntryWithRelations> for EntryResponse {
    fn from((entry, game, player): EntryWithRelations) -> Self {
        EntryResponse {
            id: entry.id,
            entry: entry.entry,
            game: game.into(),
            player: player.into(),
        }
    }
}
