use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::{get_conn, models::Game, PgPool};
use errors::Error;

use crate::serializers::GameResponse;

pub async fn retrieve(pool: Data<PgPool>, game_id: Path<i32>) -> Result<Json<GameResponse>, Error> {
    let game_id = game_id.into_inner();

    let game = block(move || -> Result<GameResponse, Error> {
        let conn = get_conn(&pool)?;
        let game = Game::find_by_id(&conn, game_id)?;
        GameResponse::load(&conn, game)
    })
    .await??;

    Ok(Json(game))
}
