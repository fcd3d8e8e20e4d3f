use serde::Deserialize;

/// `?gameId=` filter shared by the per-game resource lists.
#[derive(Debug, Deserialize)]
pub struct GameFilter {
    #[serde(rename = "gameId")]
    pub game_id: Option<i32>,
}
