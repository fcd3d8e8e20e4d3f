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
    models::{NewRating, Rating},
    PgPool,
};
use errors::Error;

use crate::handlers::{authenticated_player, referenced_game};
use crate::serializers::RatingResponse;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    #[validate(range(min = "1", max = "10"))]
    pub rating: i32,
    pub game_id: i32,
}

pub async fn create(
    id: Identity,
    pool: Data<PgPool>,
    params: Json<RatingRequest>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let params = params.into_inner();

    let rating = block(move || -> Result<RatingResponse, Error> {
        let conn = get_conn(&pool)?;
        let player = authenticated_player(&conn, &claim)?;
        let game = referenced_game(&conn, params.game_id)?;

        let rating = Rating::create(
            &conn,
            NewRating {
                rating: params.rating,
                game_id: game.id,
                player_id: player.id,
            },
        )?;

        Ok(Rating::find_by_id(&conn, rating.id)?.into())
    })
    .await??;

    info!("Created rating {} for game {}", rating.id, rating.game.id);

    Ok(HttpResponse::Created().json(rating))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use db::models::Rating;
    use errors::ErrorResponse;

    use crate::serializers::RatingResponse;
    use crate::tests::fixtures::{create_game, create_player, delete_games, delete_player};
    use crate::tests::helpers::{get_test_conn, test_post};

    #[actix_rt::test]
    async fn test_create_rating() {
        let conn = get_test_conn();
        let player = create_player(&conn, "create_rating");
        let game = create_game(&conn, "Azul");

        let (status, rating): (u16, RatingResponse) = test_post(
            "/ratings",
            json!({ "rating": 8, "gameId": game.id }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(rating.rating, 8);
        assert_eq!(rating.game.id, game.id);
        assert_eq!(rating.game.title, "Azul");
        assert_eq!(rating.player.user.first_name, "Ada");
        assert_eq!(rating.player.user.last_name, "Lovelace");

        delete_games(&conn, &[game.id]);
        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_create_rating_unknown_game() {
        let conn = get_test_conn();
        let player = create_player(&conn, "create_rating_orphan");
        let game = create_game(&conn, "Never Rated");
        delete_games(&conn, &[game.id]);

        let (status, body): (u16, ErrorResponse) = test_post(
            "/ratings",
            json!({ "rating": 5, "gameId": game.id }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body.errors[0], format!("Game {} does not exist", game.id));
        assert!(Rating::find_all(&conn, Some(game.id)).unwrap().is_empty());

        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_create_rating_out_of_range() {
        let conn = get_test_conn();
        let player = create_player(&conn, "create_rating_range");
        let game = create_game(&conn, "Overrated");

        let (status, body): (u16, ErrorResponse) = test_post(
            "/ratings",
            json!({ "rating": 11, "gameId": game.id }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body.errors, vec!["rating is invalid".to_string()]);

        delete_games(&conn, &[game.id]);
        delete_player(&conn, &player);
    }
}
