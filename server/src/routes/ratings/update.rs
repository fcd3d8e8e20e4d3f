use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json, Path},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use auth::get_claim_from_identity;
use db::{get_conn, models::Rating, PgPool};
use errors::Error;

use crate::handlers::authenticated_player;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct RatingUpdate {
    #[validate(range(min = "1", max = "10"))]
    pub rating: i32,
}

pub async fn update(
    id: Identity,
    pool: Data<PgPool>,
    rating_id: Path<i32>,
    params: Json<RatingUpdate>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let rating_id = rating_id.into_inner();
    let value = params.into_inner().rating;

    block(move || -> Result<(), Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;
        Rating::update(&conn, rating_id, value)?;

        Ok(())
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use db::models::{Game, Rating};

    use crate::serializers::GameResponse;
    use crate::tests::fixtures::{
        create_game, create_player, create_rating, delete_games, delete_player,
    };
    use crate::tests::helpers::{get_test_conn, test_get, test_put};

    #[actix_rt::test]
    async fn test_update_rating_changes_average() {
        let conn = get_test_conn();
        let player = create_player(&conn, "update_rating");
        let game = create_game(&conn, "Wingspan");
        let rating = create_rating(&conn, &game, &player, 4);

        let status = test_put(
            &format!("/ratings/{}", rating.id),
            json!({ "rating": 9 }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 204);
        let (updated, _, _) = Rating::find_by_id(&conn, rating.id).unwrap();
        assert_eq!(updated.rating, 9);
        assert_eq!(updated.game_id, game.id);

        let (_, body): (u16, GameResponse) =
            test_get(&format!("/games/{}", game.id), Some(player.token.clone())).await;
        assert_eq!(body.average_rating, 9.0);
        assert!(Game::find_by_id(&conn, game.id).is_ok());

        delete_games(&conn, &[game.id]);
        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_update_missing_rating() {
        let conn = get_test_conn();
        let player = create_player(&conn, "update_missing_rating");
        let game = create_game(&conn, "Short Rated");
        let rating = create_rating(&conn, &game, &player, 2);
        delete_games(&conn, &[game.id]);

        let status = test_put(
            &format!("/ratings/{}", rating.id),
            json!({ "rating": 7 }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 404);

        delete_player(&conn, &player);
    }
}
