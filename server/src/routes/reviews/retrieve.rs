use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::{get_conn, models::Review, PgPool};
use errors::Error;

use crate::serializers::ReviewResponse;

pub async fn retrieve(
    pool: Data<PgPool>,
    review_id: Path<i32>,
) -> Result<Json<ReviewResponse>, Error> {
    let review_id = review_id.into_inner();

    let review = block(move || -> Result<ReviewResponse, Error> {
        let conn = get_conn(&pool)?;
        Ok(Review::find_by_id(&conn, review_id)?.into())
    })
    .await??;

    Ok(Json(review))
}
