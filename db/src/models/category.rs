use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::categories::{self, dsl};

#[derive(Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[table_name = "categories"]
pub struct Category {
    pub id: i32,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "categories"]
pub struct NewCategory {
    pub label: String,
}

impl Category {
    pub fn create(conn: &PgConnection, label: String) -> Result<Category, Error> {
        let category = diesel::insert_into(categories::table)
            .values(NewCategory { label })
            .get_result(conn)?;

        Ok(category)
    }

    pub fn find_by_id(conn: &PgConnection, id: i32) -> Result<Category, Error> {
        let category = dsl::categories.find(id).first::<Category>(conn)?;

        Ok(category)
    }

    pub fn find_by_label(conn: &PgConnection, label: &str) -> Result<Category, Error> {
        let category = dsl::categories
            .filter(dsl::label.eq(label))
            .first::<Category>(conn)?;

        Ok(category)
    }

    pub fn get_all(conn: &PgConnection) -> Result<Vec<Category>, Error> {
        let all_categories = dsl::categories.order(dsl::id).load::<Category>(conn)?;

        Ok(all_categories)
    }

    pub fn update(conn: &PgConnection, id: i32, label: String) -> Result<Category, Error> {
        let category = diesel::update(dsl::categories.find(id))
            .set(dsl::label.eq(label))
            .get_result(conn)?;

        Ok(category)
    }

    pub fn delete(conn: &PgConnection, id: i32) -> Result<(), Error> {
        let deleted = diesel::delete(dsl::categories.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(Error::NotFound("Category not found".to_string()));
        }

        Ok(())
    }
}
