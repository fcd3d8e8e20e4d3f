use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};

use db::{get_conn, models::Review, PgPool};
use errors::Error;

use crate::handlers::GameFilter;
use crate::serializers::ReviewResponse;

pub async fn list(
    pool: Data<PgPool>,
    filter: Query<GameFilter>,
) -> Result<Json<Vec<ReviewResponse>>, Error> {
    let game_id = filter.into_inner().game_id;

    let reviews = block(move || -> Result<Vec<ReviewResponse>, Error> {
        let conn = get_conn(&pool)?;
        let reviews = Review::find_all(&conn, game_id)?;

        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    })
    .await??;

    Ok(Json(reviews))
}
