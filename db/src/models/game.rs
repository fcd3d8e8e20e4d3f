use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::{
    BoolExpressionMethods, BelongingToDsl, Connection, ExpressionMethods, GroupedBy,
    PgConnection, PgTextExpressionMethods, QueryDsl, RunQueryDsl,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{Category, GameCategory, Rating};
use crate::schema::games::{self, dsl};

#[derive(Clone, Debug, Deserialize, Identifiable, Queryable, Serialize)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub designer: String,
    pub year_released: i32,
    pub num_players: i32,
    pub gameplay_length: i32,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(AsChangeset, Debug, Insertable)]
#[table_name = "games"]
pub struct NewGame {
    pub title: String,
    pub description: String,
    pub designer: String,
    pub year_released: i32,
    pub num_players: i32,
    pub gameplay_length: i32,
    pub age: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameOrder {
    Title,
    Designer,
    YearReleased,
    NumPlayers,
    GameplayLength,
    Age,
}

impl FromStr for GameOrder {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "title" => Ok(GameOrder::Title),
            "designer" => Ok(GameOrder::Designer),
            "year_released" => Ok(GameOrder::YearReleased),
            "num_players" => Ok(GameOrder::NumPlayers),
            "gameplay_length" => Ok(GameOrder::GameplayLength),
            "age" => Ok(GameOrder::Age),
            _ => Err(Error::BadRequest(format!("Cannot order games by {}", value))),
        }
    }
}

pub type GameWithRelations = (Game, Vec<Category>, Vec<Rating>);

/// Mean of the rating values, or 0 for an unrated game.
pub fn average_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let total: i64 = ratings.iter().map(|rating| i64::from(rating.rating)).sum();
    total as f64 / ratings.len() as f64
}

/// Escapes `\`, `%` and `_` so user text matches literally inside `ILIKE`.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Game {
    pub fn create(
        conn: &PgConnection,
        new_game: NewGame,
        category_ids: &[i32],
    ) -> Result<Game, Error> {
        conn.transaction::<_, Error, _>(|| {
            let game: Game = diesel::insert_into(games::table)
                .values(&new_game)
                .get_result(conn)?;
            GameCategory::set_for_game(conn, game.id, category_ids)?;

            Ok(game)
        })
    }

    pub fn find_by_id(conn: &PgConnection, id: i32) -> Result<Game, Error> {
        let game = dsl::games.find(id).first::<Game>(conn)?;

        Ok(game)
    }

    pub fn search(
        conn: &PgConnection,
        text: Option<&str>,
        order: Option<GameOrder>,
    ) -> Result<Vec<Game>, Error> {
        let mut query = dsl::games.into_boxed();

        if let Some(text) = text {
            let pattern = format!("%{}%", escape_like(text));
            query = query.filter(
                dsl::title
                    .ilike(pattern.clone())
                    .or(dsl::description.ilike(pattern.clone()))
                    .or(dsl::designer.ilike(pattern)),
            );
        }

        query = match order {
            Some(GameOrder::Title) => query.order((dsl::title.asc(), dsl::id.asc())),
            Some(GameOrder::Designer) => query.order((dsl::designer.asc(), dsl::id.asc())),
            Some(GameOrder::YearReleased) => {
                query.order((dsl::year_released.asc(), dsl::id.asc()))
            }
            Some(GameOrder::NumPlayers) => query.order((dsl::num_players.asc(), dsl::id.asc())),
            Some(GameOrder::GameplayLength) => {
                query.order((dsl::gameplay_length.asc(), dsl::id.asc()))
            }
            Some(GameOrder::Age) => query.order((dsl::age.asc(), dsl::id.asc())),
            None => query.order(dsl::id.asc()),
        };

        let results = query.load::<Game>(conn)?;

        Ok(results)
    }

    pub fn update(
        conn: &PgConnection,
        id: i32,
        changes: NewGame,
        category_ids: &[i32],
    ) -> Result<Game, Error> {
        conn.transaction::<_, Error, _>(|| {
            let game: Game = diesel::update(dsl::games.find(id))
                .set(&changes)
                .get_result(conn)?;
            GameCategory::set_for_game(conn, game.id, category_ids)?;

            Ok(game)
        })
    }

    pub fn delete(conn: &PgConnection, id: i32) -> Result<(), Error> {
        let deleted = diesel::delete(dsl::games.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(Error::NotFound("Game not found".to_string()));
        }

        Ok(())
    }

    /// Loads categories and ratings for each game in two queries.
    pub fn with_relations(
        conn: &PgConnection,
        games: Vec<Game>,
    ) -> Result<Vec<GameWithRelations>, Error> {
        let game_ids: Vec<i32> = games.iter().map(|game| game.id).collect();
        let mut categories = GameCategory::categories_by_game(conn, &game_ids)?;
        let ratings = Rating::belonging_to(&games)
            .load::<Rating>(conn)?
            .grouped_by(&games);

        let results = games
            .into_iter()
            .zip(ratings)
            .map(|(game, ratings)| {
                let game_categories = categories.remove(&game.id).unwrap_or_default();
                (game, game_categories, ratings)
            })
            .collect();

        Ok(results)
    }
}
