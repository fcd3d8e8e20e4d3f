use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};

use db::{get_conn, models::Picture, PgPool};
use errors::Error;

use crate::handlers::GameFilter;
use crate::serializers::PictureResponse;

pub async fn list(
    pool: Data<PgPool>,
    filter: Query<GameFilter>,
) -> Result<Json<Vec<PictureResponse>>, Error> {
    let game_id = filter.into_inner().game_id;

    let pictures = block(move || -> Result<Vec<PictureResponse>, Error> {
        let conn = get_conn(&pool)?;
        let pictures = Picture::find_all(&conn, game_id)?;

        Ok(pictures.into_iter().map(PictureResponse::from).collect())
    })
    .await??;

    Ok(Json(pictures))
}
