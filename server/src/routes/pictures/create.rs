use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use auth::get_claim_from_identity;
use db::{
    get_conn,
    models::{NewPicture, Picture},
    PgPool,
};
use errors::Error;

use crate::handlers::{authenticated_player, referenced_game};
use crate::serializers::PictureResponse;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PictureRequest {
    #[validate(length(min = "1", max = "255"))]
    pub image: Option<String>,
    pub game_id: i32,
}

pub async fn create(
    id: Identity,
    pool: Data<PgPool>,
    params: Json<PictureRequest>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let params = params.into_inner();

    let picture = block(move || -> Result<PictureResponse, Error> {
        let conn = get_conn(&pool)?;
        let player = authenticated_player(&conn, &claim)?;
        let game = referenced_game(&conn, params.game_id)?;

        let picture = Picture::create(
            &conn,
            NewPicture {
                image: params.image,
                game_id: game.id,
                player_id: player.id,
            },
        )?;

        Ok(Picture::find_by_id(&conn, picture.id)?.into())
    })
    .await??;

    info!("Created picture {} for game {}", picture.id, picture.game.id);

    Ok(HttpResponse::Created().json(picture))
}
