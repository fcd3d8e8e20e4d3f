use diesel::PgConnection;
use serde::{Deserialize, Serialize};

use db::models::{average_rating, Game, GameWithRelations};
use errors::Error;

use super::CategoryResponse;

/// A game as it appears nested one level inside another resource.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct GameSummary {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub designer: String,
    pub year_released: i32,
    pub num_players: i32,
    pub gameplay_length: i32,
    pub age: i32,
}

impl From<Game> for GameSummary {
    fn from(game: Game) -> Self {
        GameSummary {
            id: game.id,
            title: game.title,
            description: game.description,
            designer: game.designer,
            year_released: game.year_released,
            num_players: game.num_players,
            gameplay_length: game.gameplay_length,
            age: game.age,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct GameResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub designer: String,
    pub year_released: i32,
    pub num_players: i32,
    pub gameplay_length: i32,
    pub age: i32,
    pub categories: Vec<CategoryResponse>,
    pub average_rating: f64,
}

impl From<GameWithRelations> for GameResponse {
    fn from((game, categories, ratings): GameWithRelations) -> Self {
        let average_rating = average_rating(&ratings);
        GameResponse {
            id: game.id,
            title: game.title,
            description: game.description,
            designer: game.designer,
            year_released: game.year_released,
            num_players: game.num_players,
            gameplay_length: game.gameplay_length,
            age: game.age,
            categories: categories.into_iter().map(CategoryResponse::from).collect(),
            average_rating,
        }
    }
}

impl GameResponse {
    pub fn load(conn: &PgConnection, game: Game) -> Result<GameResponse, Error> {
        let game_id = game.id;
        GameResponse::load_all(conn, vec![game])?
            .pop()
            .ok_or_else(|| Error::NotFound(format!("Game {} not found", game_id)))
    }

    pub fn load_all(conn: &PgConnection, games: Vec<Game>) -> Result<Vec<GameResponse>, Error> {
        let games = Game::with_relations(conn, games)?;

        Ok(games.into_iter().map(GameResponse::from).collect())
    }
}
