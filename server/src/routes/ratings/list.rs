use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};

use db::{get_conn, models::Rating, PgPool};
use errors::Error;

use crate::handlers::GameFilter;
use crate::serializers::RatingResponse;

pub async fn list(
    pool: Data<PgPool>,
    filter: Query<GameFilter>,
) -> Result<Json<Vec<RatingResponse>>, Error> {
    let game_id = filter.into_inner().game_id;

    let ratings = block(move || -> Result<Vec<RatingResponse>, Error> {
        let conn = get_conn(&pool)?;
        let ratings = Rating::find_all(&conn, game_id)?;

        Ok(ratings.into_iter().map(RatingResponse::from).collect())
    })
    .await??;

    Ok(Json(ratings))
}

#[cfg(test)]
mod tests {
    use errors::ErrorResponse;

    use crate::serializers::RatingResponse;
    use crate::tests::fixtures::{
        create_game, create_player, create_rating, delete_games, delete_player,
    };
    use crate::tests::helpers::{get_test_conn, test_get};

    #[actix_rt::test]
    async fn test_list_ratings_for_game() {
        let conn = get_test_conn();
        let player = create_player(&conn, "list_ratings");
        let filtered = create_game(&conn, "Terraforming Mars");
        let other = create_game(&conn, "Scythe");
        let first = create_rating(&conn, &filtered, &player, 9);
        let second = create_rating(&conn, &filtered, &player, 7);
        create_rating(&conn, &other, &player, 2);

        let (status, ratings): (u16, Vec<RatingResponse>) = test_get(
            &format!("/ratings?gameId={}", filtered.id),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 200);
        let ids: Vec<i32> = ratings.iter().map(|rating| rating.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert!(ratings.iter().all(|rating| rating.game.id == filtered.id));

        delete_games(&conn, &[filtered.id, other.id]);
        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_list_all_ratings() {
        let conn = get_test_conn();
        let player = create_player(&conn, "list_all_ratings");
        let first_game = create_game(&conn, "Everdell");
        let second_game = create_game(&conn, "Cascadia");
        let first = create_rating(&conn, &first_game, &player, 8);
        let second = create_rating(&conn, &second_game, &player, 6);

        let (status, ratings): (u16, Vec<RatingResponse>) =
            test_get("/ratings", Some(player.token.clone())).await;

        assert_eq!(status, 200);
        assert!(ratings.iter().any(|rating| rating.id == first.id));
        assert!(ratings.iter().any(|rating| rating.id == second.id));

        delete_games(&conn, &[first_game.id, second_game.id]);
        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_list_ratings_bad_game_id() {
        let conn = get_test_conn();
        let player = create_player(&conn, "list_ratings_bad_filter");

        let (status, _): (u16, ErrorResponse) =
            test_get("/ratings?gameId=abc", Some(player.token.clone())).await;

        assert_eq!(status, 400);

        delete_player(&conn, &player);
    }
}
