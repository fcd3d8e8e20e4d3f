use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};
use serde::Deserialize;

use db::{
    get_conn,
    models::{Game, GameOrder},
    PgPool,
};
use errors::Error;

use crate::serializers::GameResponse;

#[derive(Debug, Deserialize)]
pub struct GameSearch {
    pub q: Option<String>,
    pub orderby: Option<String>,
}

pub async fn list(
    pool: Data<PgPool>,
    search: Query<GameSearch>,
) -> Result<Json<Vec<GameResponse>>, Error> {
    let GameSearch { q, orderby } = search.into_inner();
    let order = orderby
        .map(|field| field.parse::<GameOrder>())
        .transpose()?;
    let text = q.filter(|text| !text.trim().is_empty());

    let games = block(move || -> Result<Vec<GameResponse>, Error> {
        let conn = get_conn(&pool)?;
        let games = Game::search(&conn, text.as_deref(), order)?;
        GameResponse::load_all(&conn, games)
    })
    .await??;

    Ok(Json(games))
}
