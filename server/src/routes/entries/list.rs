use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};

use db::{get_conn, models::Entry, PgPool};
use errors::Error;

use crate::handlers::GameFilter;
use crate::serializers::EntryResponse;

pub async fn list(
    pool: Data<PgPool>,
    filter: Query<GameFilter>,
) -> Result<Json<Vec<EntryResponse>>, Error> {
    let game_id = filter.into_inner().game_id;

    let entries = block(move || -> Result<Vec<EntryResponse>, Error> {
        let conn = get_conn(&pool)?;
        let entries = Entry::find_all(&conn, game_id)?;

        Ok(entries.into_iter().map(EntryResponse::from).collect())
    })
    .await??;

    Ok(Json(entries))
}
