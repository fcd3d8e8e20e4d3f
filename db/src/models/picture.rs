use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{Game, Player, User};
use crate::schema::{games, pictures, players, users};

/// A player's picture of a game. `image` is a reference to where the upload
/// lives, the bytes are stored elsewhere.
#[derive(Associations, Debug, Deserialize, Identifiable, Queryable, Serialize)]
#[belongs_to(Game)]
#[belongs_to(Player)]
pub struct Picture {
    pub id: i32,
    pub image: Option<String>,
    pub game_id: i32,
    pub player_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "pictures"]
pub struct NewPicture {
    pub image: Option<String>,
    pub game_id: i32,
    pub player_id: i32,
}

pub type PictureWithRelations = (Picture, Game, (Player, User));

impl Picture {
    pub fn create(conn: &PgConnection, new_picture: NewPicture) -> Result<Picture, Error> {
        let picture = diesel::insert_into(pictures::table)
            .values(new_picture)
            .get_result(conn)?;

        Ok(picture)
    }

    pub fn find_by_id(conn: &PgConnection, id: i32) -> Result<PictureWithRelations, Error> {
        let result = pictures::table
            .inner_join(games::table)
            .inner_join(players::table.inner_join(users::table))
            .filter(pictures::id.eq(id))
            .first::<PictureWithRelations>(conn)?;

        Ok(result)
    }

    pub fn find_all(
        conn: &PgConnection,
        game_id: Option<i32>,
    ) -> Result<Vec<PictureWithRelations>, Error> {
        let mut query = pictures::table
            .inner_join(games::table)
            .inner_join(players::table.inner_join(users::table))
            .order(pictures::id)
            .into_boxed();

        if let Some(game_id) = game_id {
            query = query.filter(pictures::game_id.eq(game_id));
        }

        let results = query.load::<PictureWithRelations>(conn)?;

        Ok(results)
    }

    pub fn update(conn: &PgConnection, id: i32, image: Option<String>) -> Result<Picture, Error> {
        let picture = diesel::update(pictures::table.find(id))
            .set(pictures::image.eq(image))
            .get_result(conn)?;

        Ok(picture)
    }

    pub fn delete(conn: &PgConnection, id: i32) -> Result<(), Error> {
        let deleted = diesel::delete(pictures::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(Error::NotFound("Picture not found".to_string()));
        }

        Ok(())
    }
}
