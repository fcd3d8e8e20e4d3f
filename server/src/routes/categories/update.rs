use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json, Path},
    HttpResponse, Result,
};

use auth::get_claim_from_identity;
use db::{get_conn, models::Category, PgPool};
use errors::Error;

use super::CategoryRequest;
use crate::handlers::authenticated_player;
use crate::validate::validate;

pub async fn update(
    id: Identity,
    pool: Data<PgPool>,
    category_id: Path<i32>,
    params: Json<CategoryRequest>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let category_id = category_id.into_inner();
    let label = params.into_inner().label;

    block(move || -> Result<(), Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;
        Category::update(&conn, category_id, label)?;

        Ok(())
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}
