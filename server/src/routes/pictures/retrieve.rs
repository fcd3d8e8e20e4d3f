use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::{get_conn, models::Picture, PgPool};
use errors::Error;

use crate::serializers::PictureResponse;

pub async fn retrieve(
    pool: Data<PgPool>,
    picture_id: Path<i32>,
) -> Result<Json<PictureResponse>, Error> {
    let picture_id = picture_id.into_inner();

    let picture = block(move || -> Result<PictureResponse, Error> {
        let conn = get_conn(&pool)?;
        Ok(Picture::find_by_id(&conn, picture_id)?.into())
    })
    .await??;

    Ok(Json(picture))
}
