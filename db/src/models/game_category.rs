use std::collections::HashMap;

use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};

use errors::Error;

use crate::models::{Category, Game};
use crate::schema::{categories, game_categories};

#[derive(Associations, Debug, Identifiable, Queryable)]
#[belongs_to(Game)]
#[belongs_to(Category)]
#[table_name = "game_categories"]
pub struct GameCategory {
    pub id: i32,
    pub game_id: i32,
    pub category_id: i32,
}

#[derive(Insertable)]
#[table_name = "game_categories"]
pub struct NewGameCategory {
    pub game_id: i32,
    pub category_id: i32,
}

impl GameCategory {
    /// Replaces the categories attached to a game with `category_ids`.
    pub fn set_for_game(
        conn: &PgConnection,
        game_id: i32,
        category_ids: &[i32],
    ) -> Result<(), Error> {
        diesel::delete(game_categories::table.filter(game_categories::game_id.eq(game_id)))
            .execute(conn)?;

        let mut ids = category_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(());
        }

        diesel::insert_into(game_categories::table)
            .values(
                ids.into_iter()
                    .map(|category_id| NewGameCategory {
                        game_id,
                        category_id,
                    })
                    .collect::<Vec<NewGameCategory>>(),
            )
            .execute(conn)?;

        Ok(())
    }

    /// Categories for each of the given games, keyed by game id.
    pub fn categories_by_game(
        conn: &PgConnection,
        game_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Category>>, Error> {
        let rows = game_categories::table
            .inner_join(categories::table)
            .filter(game_categories::game_id.eq_any(game_ids))
            .order(categories::id)
            .load::<(GameCategory, Category)>(conn)?;

        let mut grouped: HashMap<i32, Vec<Category>> = HashMap::new();
        for (link, category) in rows {
            grouped.entry(link.game_id).or_default().push(category);
        }

        Ok(grouped)
    }
}
