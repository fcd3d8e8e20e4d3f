use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::{get_conn, models::Entry, PgPool};
use errors::Error;

use crate::serializers::EntryResponse;

pub async fn retrieve(
    pool: Data<PgPool>,
    entry_id: Path<i32>,
) -> Result<Json<EntryResponse>, Error> {
    let entry_id = entry_id.into_inner();

    let entry = block(move || -> Result<EntryResponse, Error> {
        let conn = get_conn(&pool)?;
        Ok(Entry::find_by_id(&conn, entry_id)?.into())
    })
    .await??;

    Ok(Json(entry))
}

#[cfg(test)]
mod tests {
    use errors::ErrorResponse;

    use crate::serializers::EntryResponse;
    use crate::tests::fixtures::{
        create_entry, create_game, create_player, delete_games, delete_player,
    };
    use crate::tests::helpers::{get_test_conn, test_get};

    #[actix_rt::test]
    async fn test_retrieve_entry() {
        let conn = get_test_conn();
        let player = create_player(&conn, "retrieve_entry");
        let game = create_game(&conn, "Mysterium");
        let entry = create_entry(&conn, &game, &player, "The ghost was vague");

        let (status, body): (u16, EntryResponse) =
            test_get(&format!("/entries/{}", entry.id), Some(player.token.clone())).await;

        assert_eq!(status, 200);
        assert_eq!(body.entry, "The ghost was vague");
        assert_eq!(body.game.id, game.id);

        delete_games(&conn, &[game.id]);
        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_retrieve_missing_entry() {
        let conn = get_test_conn();
        let player = create_player(&conn, "retrieve_missing_entry");
        let game = create_game(&conn, "Erased");
        let entry = create_entry(&conn, &game, &player, "Soon erased");
        delete_games(&conn, &[game.id]);

        let (status, _): (u16, ErrorResponse) =
            test_get(&format!("/entries/{}", entry.id), Some(player.token.clone())).await;

        assert_eq!(status, 404);

        delete_player(&conn, &player);
    }
}
