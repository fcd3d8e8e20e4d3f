use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Path},
    HttpResponse, Result,
};

use auth::get_claim_from_identity;
use db::{get_conn, models::Category, PgPool};
use errors::Error;

use crate::handlers::authenticated_player;

pub async fn destroy(
    id: Identity,
    pool: Data<PgPool>,
    category_id: Path<i32>,
) -> Result<HttpResponse, Error> {
    let (claim, _) = get_claim_from_identity(id)?;
    let category_id = category_id.into_inner();

    block(move || -> Result<(), Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;
        Category::delete(&conn, category_id)
    })
    .await??;

    info!("Deleted category {}", category_id);

    Ok(HttpResponse::NoContent().finish())
}
