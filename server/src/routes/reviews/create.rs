use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json},
    HttpResponse, Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use auth::get_claim_from_identity;
use db::{
    get_conn,
    models::{NewReview, Review},
    PgPool,
};
use errors::Error;

use crate::handlers::{authenticated_player, referenced_game};
use crate::serializers::ReviewResponse;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[validate(length(min = "1", max = "50"))]
    pub review: String,
    pub date: DateTime<Utc>,
    pub game_id: i32,
}

pub async fn create(
    id: Identity,
    pool: Data<PgPool>,
    params: Json<ReviewRequest>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let params = params.into_inner();

    let review = block(move || -> Result<ReviewResponse, Error> {
        let conn = get_conn(&pool)?;
        let player = authenticated_player(&conn, &claim)?;
        let game = referenced_game(&conn, params.game_id)?;

        let review = Review::create(
            &conn,
            NewReview {
                review: params.review,
                date: params.date,
                game_id: game.id,
                player_id: player.id,
            },
        )?;

        Ok(Review::find_by_id(&conn, review.id)?.into())
    })
    .await??;

    info!("Created review {} for game {}", review.id, review.game.id);

    Ok(HttpResponse::Created().json(review))
}
