use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Path},
    HttpResponse, Result,
};

use auth::get_claim_from_identity;
use db::{get_conn, models::Entry, PgPool};
use errors::Error;

use crate::handlers::authenticated_player;

pub async fn destroy(
    id: Identity,
    pool: Data<PgPool>,
    entry_id: Path<i32>,
) -> Result<HttpResponse, Error> {
    let (claim, _) = get_claim_from_identity(id)?;
    let entry_id = entry_id.into_inner();

    block(move || -> Result<(), Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;
        Entry::delete(&conn, entry_id)
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use db::models::Entry;

    use crate::tests::fixtures::{
        create_entry, create_game, create_player, delete_games, delete_player,
    };
    use crate::tests::helpers::{get_test_conn, test_delete};

    #[actix_rt::test]
    async fn test_destroy_entry() {
        let conn = get_test_conn();
        let player = create_player(&conn, "destroy_entry");
        let game = create_game(&conn, "Codenames");
        let entry = create_entry(&conn, &game, &player, "Guessed the assassin");

        let first = test_delete(&format!("/entries/{}", entry.id), Some(player.token.clone())).await;
        let second = test_delete(&format!("/entries/{}", entry.id), Some(player.token.clone())).await;

        assert_eq!(first, 204);
        assert_eq!(second, 404);
        assert!(Entry::find_by_id(&conn, entry.id).is_err());

        delete_games(&conn, &[game.id]);
        delete_player(&conn, &player);
    }
}
