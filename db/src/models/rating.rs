use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{Game, Player, User};
use crate::schema::{games, players, ratings, users};

#[derive(Associations, Debug, Deserialize, Identifiable, Queryable, Serialize)]
#[belongs_to(Game)]
#[belongs_to(Player)]
pub struct Rating {
    pub id: i32,
    pub rating: i32,
    pub game_id: i32,
    pub player_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "ratings"]
pub struct NewRating {
    pub rating: i32,
    pub game_id: i32,
    pub player_id: i32,
}

pub type RatingWithRelations = (Rating, Game, (Player, User));

impl Rating {
    pub fn create(conn: &PgConnection, new_rating: NewRating) -> Result<Rating, Error> {
        let rating = diesel::insert_into(ratings::table)
            .values(new_rating)
            .get_result(conn)?;

        Ok(rating)
    }

    pub fn find_by_id(conn: &PgConnection, id: i32) -> Result<RatingWithRelations, Error> {
        let result = ratings::table
            .inner_join(games::table)
            .inner_join(players::table.inner_join(users::table))
            .filter(ratings::id.eq(id))
            .first::<RatingWithRelations>(conn)?;

        Ok(result)
    }

    pub fn find_all(
        conn: &PgConnection,
        game_id: Option<i32>,
    ) -> Result<Vec<RatingWithRelations>, Error> {
        let mut query = ratings::table
            .inner_join(games::table)
            .inner_join(players::table.inner_join(users::table))
            .order(ratings::id)
            .into_boxed();

        if let Some(game_id) = game_id {
            query = query.filter(ratings::game_id.eq(game_id));
        }

        let results = query.load::<RatingWithRelations>(conn)?;

        Ok(results)
    }

    pub fn update(conn: &PgConnection, id: i32, rating: i32) -> Result<Rating, Error> {
        let rating = diesel::update(ratings::table.find(id))
            .set(ratings::rating.eq(rating))
            .get_result(conn)?;

        Ok(rating)
    }

    pub fn delete(conn: &PgConnection, id: i32) -> Result<(), Error> {
        let deleted = diesel::delete(ratings::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(Error::NotFound("Rating not found".to_string()));
        }

        Ok(())
    }
}
