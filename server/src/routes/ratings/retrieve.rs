use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::{get_conn, models::Rating, PgPool};
use errors::Error;

use crate::serializers::RatingResponse;

pub async fn retrieve(
    pool: Data<PgPool>,
    rating_id: Path<i32>,
) -> Result<Json<RatingResponse>, Error> {
    let rating_id = rating_id.into_inner();

    let rating = block(move || -> Result<RatingResponse, Error> {
        let conn = get_conn(&pool)?;
        Ok(Rating::find_by_id(&conn, rating_id)?.into())
    })
    .await??;

    Ok(Json(rating))
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
    async fn test_retrieve_rating() {
        let conn = get_test_conn();
        let player = create_player(&conn, "retrieve_rating");
        let game = create_game(&conn, "Splendor");
        let rating = create_rating(&conn, &game, &player, 6);

        let (status, body): (u16, RatingResponse) =
            test_get(&format!("/ratings/{}", rating.id), Some(player.token.clone())).await;

        assert_eq!(status, 200);
        assert_eq!(body.id, rating.id);
        assert_eq!(body.rating, 6);
        assert_eq!(body.game.title, "Splendor");
        assert_eq!(body.player.user.first_name, "Ada");

        delete_games(&conn, &[game.id]);
        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_retrieve_missing_rating() {
        let conn = get_test_conn();
        let player = create_player(&conn, "retrieve_missing_rating");
        let game = create_game(&conn, "Unrateable");
        let rating = create_rating(&conn, &game, &player, 3);
        delete_games(&conn, &[game.id]);

        let (status, _): (u16, ErrorResponse) =
            test_get(&format!("/ratings/{}", rating.id), Some(player.token.clone())).await;

        assert_eq!(status, 404);

        delete_player(&conn, &player);
    }
}
