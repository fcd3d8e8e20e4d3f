use chrono::{DateTime, Utc};
use diesel::{PgConnection, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::users;

#[derive(Debug, Deserialize, Identifiable, Queryable, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn create(connection: &PgConnection, new_user: NewUser) -> Result<User, Error> {
        let user = diesel::insert_into(users::table)
            .values(new_user)
            .get_result(connection)?;

        Ok(user)
    }
}
