use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json, Path},
    HttpResponse, Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use auth::get_claim_from_identity;
use db::{get_conn, models::Review, PgPool};
use errors::Error;

use crate::handlers::authenticated_player;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct ReviewUpdate {
    #[validate(length(min = "1", max = "50"))]
    pub review: String,
    pub date: DateTime<Utc>,
}

pub async fn update(
    id: Identity,
    pool: Data<PgPool>,
    review_id: Path<i32>,
    params: Json<ReviewUpdate>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let review_id = review_id.into_inner();
    let ReviewUpdate { review, date } = params.into_inner();

    block(move || -> Result<(), Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;
        Review::update(&conn, review_id, review, date)?;

        Ok(())
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}
