use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Path},
    HttpResponse, Result,
};

use auth::get_claim_from_identity;
use db::{get_conn, models::Picture, PgPool};
use errors::Error;

use crate::handlers::authenticated_player;

pub async fn destroy(
    id: Identity,
    pool: Data<PgPool>,
    picture_id: Path<i32>,
) -> Result<HttpResponse, Error> {
    let (claim, _) = get_claim_from_identity(id)?;
    let picture_id = picture_id.into_inner();

    block(move || -> Result<(), Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;
        Picture::delete(&conn, picture_id)
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}
