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
    models::{Entry, NewEntry},
    PgPool,
};
use errors::Error;

use crate::handlers::{authenticated_player, referenced_game};
use crate::serializers::EntryResponse;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    #[validate(length(min = "1"))]
    pub entry: String,
    pub game_id: i32,
}

pub async fn create(
    id: Identity,
    pool: Data<PgPool>,
    params: Json<EntryRequest>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let params = params.into_inner();

    let entry = block(move || -> Result<EntryResponse, Error> {
        let conn = get_conn(&pool)?;
        let player = authenticated_player(&conn, &claim)?;
        let game = referenced_game(&conn, params.game_id)?;

        let entry = Entry::create(
            &conn,
            NewEntry {
                entry: params.entry,
                game_id: game.id,
                player_id: player.id,
            },
        )?;

        Ok(Entry::find_by_id(&conn, entry.id)?.into())
    })
    .await??;

    info!("Created entry {} for game {}", entry.id, entry.game.id);

    Ok(HttpResponse::Created().json(entry))
}
