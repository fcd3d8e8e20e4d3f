use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{Game, Player, User};
use crate::schema::{entries, games, players, users};

#[derive(Associations, Debug, Deserialize, Identifiable, Queryable, Serialize)]
#[belongs_to(Game)]
#[belongs_to(Player)]
#[table_name = "entries"]
pub struct Entry {
    pub id: i32,
    pub entry: String,
    pub game_id: i32,
    pub player_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "entries"]
pub struct NewEntry {
    pub entry: String,
    pub game_id: i32,
    pub player_id: i32,
}

pub type EntryWithRelations = (Entry, Game, (Player, User));

impl Entry {
    pub fn create(conn: &PgConnection, new_entry: NewEntry) -> Result<Entry, Error> {
        let entry = diesel::insert_into(entries::table)
            .values(new_entry)
            .get_result(conn)?;

        Ok(entry)
    }

    pub fn find_by_id(conn: &PgConnection, id: i32) -> Result<EntryWithRelations, Error> {
        let result = entries::table
            .inner_join(games::table)
            .inner_join(players::table.inner_join(users::table))
            .filter(entries::id.eq(id))
            .first::<EntryWithRelations>(conn)?;

        Ok(result)
    }

    pub fn find_all(
        conn: &PgConnection,
        game_id: Option<i32>,
    ) -> Result<Vec<EntryWithRelations>, Error> {
        let mut query = entries::table
            .inner_join(games::table)
            .inner_join(players::table.inner_join(users::table))
            .order(entries::id)
            .into_boxed();

        if let Some(game_id) = game_id {
            query = query.filter(entries::game_id.eq(game_id));
        }

        let results = query.load::<EntryWithRelations>(conn)?;

        Ok(results)
    }

    pub fn update(conn: &PgConnection, id: i32, entry: String) -> Result<Entry, Error> {
        let entry = diesel::update(entries::table.find(id))
            .set(entries::entry.eq(entry))
            .get_result(conn)?;

        Ok(entry)
    }

    pub fn delete(conn: &PgConnection, id: i32) -> Result<(), Error> {
        let deleted = diesel::delete(entries::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(Error::NotFound("Entry not found".to_string()));
        }

        Ok(())
    }
}
