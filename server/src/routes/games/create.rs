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
    models::{Game, NewGame},
    PgPool,
};
use errors::Error;

use crate::handlers::authenticated_player;
use crate::serializers::GameResponse;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    #[validate(length(min = "1", max = "50"))]
    pub title: String,
    #[validate(length(min = "1", max = "50"))]
    pub description: String,
    #[validate(length(min = "1", max = "50"))]
    pub designer: String,
    pub year_released: i32,
    #[validate(range(min = "1", max = "100"))]
    pub num_players: i32,
    #[validate(range(min = "0", max = "100000"))]
    pub gameplay_length: i32,
    #[validate(range(min = "0", max = "150"))]
    pub age: i32,
    pub categories: Vec<i32>,
}

impl GameRequest {
    pub fn into_parts(self) -> (NewGame, Vec<i32>) {
        (
            NewGame {
                title: self.title,
                description: self.description,
                designer: self.designer,
                year_released: self.year_released,
                num_players: self.num_players,
                gameplay_length: self.gameplay_length,
                age: self.age,
            },
            self.categories,
        )
    }
}

pub async fn create(
    id: Identity,
    pool: Data<PgPool>,
    params: Json<GameRequest>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let params = params.into_inner();

    let game = block(move || -> Result<GameResponse, Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;

        let (new_game, categories) = params.into_parts();
        let game = Game::create(&conn, new_game, &categories)?;
        GameResponse::load(&conn, game)
    })
    .await??;

    info!("Created game {}", game.id);

    Ok(HttpResponse::Created().json(game))
}
