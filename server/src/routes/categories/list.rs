use actix_web::{
    web::{block, Data, Json},
    Result,
};

use db::{get_conn, models::Category, PgPool};
use errors::Error;

use crate::serializers::CategoryResponse;

pub async fn list(pool: Data<PgPool>) -> Result<Json<Vec<CategoryResponse>>, Error> {
    let categories = block(move || -> Result<Vec<Category>, Error> {
        let conn = get_conn(&pool)?;
        Category::get_all(&conn)
    })
    .await??;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}
