use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json, Path},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use auth::get_claim_from_identity;
use db::{get_conn, models::Entry, PgPool};
use errors::Error;

use crate::handlers::authenticated_player;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct EntryUpdate {
    #[validate(length(min = "1"))]
    pub entry: String,
}

pub async fn update(
    id: Identity,
    pool: Data<PgPool>,
    entry_id: Path<i32>,
    params: Json<EntryUpdate>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let entry_id = entry_id.into_inner();
    let text = params.into_inner().entry;

    block(move || -> Result<(), Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;
        Entry::update(&conn, entry_id, text)?;

        Ok(())
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}
