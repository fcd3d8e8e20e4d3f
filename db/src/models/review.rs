use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{Game, Player, User};
use crate::schema::{games, players, reviews, users};

#[derive(Associations, Debug, Deserialize, Identifiable, Queryable, Serialize)]
#[belongs_to(Game)]
#[belongs_to(Player)]
pub struct Review {
    pub id: i32,
    pub review: String,
    pub date: DateTime<Utc>,
    pub game_id: i32,
    pub player_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "reviews"]
pub struct NewReview {
    pub review: String,
    pub date: DateTime<Utc>,
    pub game_id: i32,
    pub player_id: i32,
}

pub type ReviewWithRelations = (Review, Game, (Player, User));

impl Review {
    pub fn create(conn: &PgConnection, new_review: NewReview) -> Result<Review, Error> {
        let review = diesel::insert_into(reviews::table)
            .values(new_review)
            .get_result(conn)?;

        Ok(review)
    }

    pub fn find_by_id(conn: &PgConnection, id: i32) -> Result<ReviewWithRelations, Error> {
        let result = reviews::table
            .inner_join(games::table)
            .inner_join(players::table.inner_join(users::table))
            .filter(reviews::id.eq(id))
            .first::<ReviewWithRelations>(conn)?;

        Ok(result)
    }

    pub fn find_all(
        conn: &PgConnection,
        game_id: Option<i32>,
    ) -> Result<Vec<ReviewWithRelations>, Error> {
        let mut query = reviews::table
            .inner_join(games::table)
            .inner_join(players::table.inner_join(users::table))
            .order(reviews::id)
            .into_boxed();

        if let Some(game_id) = game_id {
            query = query.filter(reviews::game_id.eq(game_id));
        }

        let results = query.load::<ReviewWithRelations>(conn)?;

        Ok(results)
    }

    pub fn update(
        conn: &PgConnection,
        id: i32,
        review: String,
        date: DateTime<Utc>,
    ) -> Result<Review, Error> {
        let review = diesel::update(reviews::table.find(id))
            .set((reviews::review.eq(review), reviews::date.eq(date)))
            .get_result(conn)?;

        Ok(review)
    }

    pub fn delete(conn: &PgConnection, id: i32) -> Result<(), Error> {
        let deleted = diesel::delete(reviews::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(Error::NotFound("Review not found".to_string()));
        }

        Ok(())
    }
}
