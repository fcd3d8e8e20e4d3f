use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json, Path},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use auth::get_claim_from_identity;
use db::{get_conn, models::Picture, PgPool};
use errors::Error;

use crate::handlers::authenticated_player;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct PictureUpdate {
    #[validate(length(min = "1", max = "255"))]
    pub image: Option<String>,
}

pub async fn update(
    id: Identity,
    pool: Data<PgPool>,
    picture_id: Path<i32>,
    params: Json<PictureUpdate>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let picture_id = picture_id.into_inner();
    let image = params.into_inner().image;

    block(move || -> Result<(), Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;
        Picture::update(&conn, picture_id, image)?;

        Ok(())
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use db::models::Picture;

    use crate::tests::fixtures::{
        create_game, create_picture, create_player, delete_games, delete_player,
    };
    use crate::tests::helpers::{get_test_conn, test_put};

    #[actix_rt::test]
    async fn test_update_picture() {
        let conn = get_test_conn();
        let player = create_player(&conn, "update_picture");
        let game = create_game(&conn, "Sagrada");
        let picture = create_picture(&conn, &game, &player, "gameimages/old.png");

        let status = test_put(
            &format!("/pictures/{}", picture.id),
            json!({ "image": "gameimages/new.png" }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 204);
        let (updated, _, _) = Picture::find_by_id(&conn, picture.id).unwrap();
        assert_eq!(updated.image, Some("gameimages/new.png".to_string()));

        delete_games(&conn, &[game.id]);
        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_clear_picture_image() {
        let conn = get_test_conn();
        let player = create_player(&conn, "clear_picture");
        let game = create_game(&conn, "Faded");
        let picture = create_picture(&conn, &game, &player, "gameimages/faded.png");

        let status = test_put(
            &format!("/pictures/{}", picture.id),
            json!({ "image": null }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 204);
        let (updated, _, _) = Picture::find_by_id(&conn, picture.id).unwrap();
        assert_eq!(updated.image, None);

        delete_games(&conn, &[game.id]);
        delete_player(&conn, &player);
    }
}
