use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::User;
use crate::schema::{players, users};

#[derive(Associations, Debug, Deserialize, Identifiable, Queryable, Serialize)]
#[belongs_to(User)]
pub struct Player {
    pub id: i32,
    pub user_id: i32,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "players"]
pub struct NewPlayer {
    pub user_id: i32,
    pub bio: String,
}

impl Player {
    pub fn create(connection: &PgConnection, user_id: i32, bio: String) -> Result<Player, Error> {
        let player = diesel::insert_into(players::table)
            .values(NewPlayer { user_id, bio })
            .get_result(connection)?;

        Ok(player)
    }

    pub fn find_by_id(connection: &PgConnection, id: i32) -> Result<Player, Error> {
        let player = players::table.find(id).first::<Player>(connection)?;

        Ok(player)
    }

    pub fn find_by_username(
        connection: &PgConnection,
        username: &str,
    ) -> Result<(Player, User), Error> {
        let result = players::table
            .inner_join(users::table)
            .filter(users::username.eq(username))
            .first::<(Player, User)>(connection)?;

        Ok(result)
    }
}
