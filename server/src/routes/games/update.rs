use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json, Path},
    HttpResponse, Result,
};

use auth::get_claim_from_identity;
use db::{get_conn, models::Game, PgPool};
use errors::Error;

use super::GameRequest;
use crate::handlers::authenticated_player;
use crate::validate::validate;

pub async fn update(
    id: Identity,
    pool: Data<PgPool>,
    game_id: Path<i32>,
    params: Json<GameRequest>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let game_id = game_id.into_inner();
    let params = params.into_inner();

    block(move || -> Result<(), Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;

        let (changes, categories) = params.into_parts();
        Game::update(&conn, game_id, changes, &categories)?;

        Ok(())
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use db::models::{Game, GameCategory};

    use crate::tests::fixtures::{
        create_category, create_game, create_player, delete_categories, delete_games,
        delete_player,
    };
    use crate::tests::helpers::{get_test_conn, test_put};

    #[actix_rt::test]
    async fn test_update_game() {
        let conn = get_test_conn();
        let player = create_player(&conn, "update_game");
        let game = create_game(&conn, "Catan");
        let category = create_category(&conn, "Trading");

        let status = test_put(
            &format!("/games/{}", game.id),
            json!({
                "title": "Catan",
                "description": "Trade and build",
                "designer": "Klaus Teuber",
                "yearReleased": 1995,
                "numPlayers": 4,
                "gameplayLength": 90,
                "age": 10,
                "categories": [category.id],
            }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 204);

        let updated = Game::find_by_id(&conn, game.id).unwrap();
        assert_eq!(updated.designer, "Klaus Teuber");
        assert_eq!(updated.year_released, 1995);
        assert_eq!(updated.gameplay_length, 90);

        let categories = GameCategory::categories_by_game(&conn, &[game.id]).unwrap();
        assert_eq!(categories[&game.id].len(), 1);
        assert_eq!(categories[&game.id][0].id, category.id);

        delete_games(&conn, &[game.id]);
        delete_categories(&conn, &[category.id]);
        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_update_missing_game() {
        let conn = get_test_conn();
        let player = create_player(&conn, "update_missing_game");
        let game = create_game(&conn, "Vanished");
        delete_games(&conn, &[game.id]);

        let status = test_put(
            &format!("/games/{}", game.id),
            json!({
                "title": "Vanished",
                "description": "Not here",
                "designer": "Nobody",
                "yearReleased": 2000,
                "numPlayers": 2,
                "gameplayLength": 20,
                "age": 6,
                "categories": [],
            }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 404);

        delete_player(&conn, &player);
    }
}
