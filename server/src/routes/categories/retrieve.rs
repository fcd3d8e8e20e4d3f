use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::{get_conn, models::Category, PgPool};
use errors::Error;

use crate::serializers::CategoryResponse;

pub async fn retrieve(
    pool: Data<PgPool>,
    category_id: Path<i32>,
) -> Result<Json<CategoryResponse>, Error> {
    let category_id = category_id.into_inner();

    let category = block(move || -> Result<Category, Error> {
        let conn = get_conn(&pool)?;
        Category::find_by_id(&conn, category_id)
    })
    .await??;

    Ok(Json(CategoryResponse::from(category)))
}
