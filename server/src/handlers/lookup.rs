use diesel::PgConnection;

use auth::PrivateClaim;
use db::models::{Game, Player};
use errors::Error;

/// Resolves the player a token was issued for. A token whose player has since
/// been removed is treated as unauthenticated.
pub fn authenticated_player(conn: &PgConnection, claim: &PrivateClaim) -> Result<Player, Error> {
    Player::find_by_id(conn, claim.id).map_err(|err| match err {
        Error::NotFound(_) => Error::Unauthorized,
        _ => err,
    })
}

/// Looks up the game a new rating, review, entry or picture points at.
pub fn referenced_game(conn: &PgConnection, game_id: i32) -> Result<Game, Error> {
    Game::find_by_id(conn, game_id).map_err(|err| match err {
        Error::NotFound(_) => Error::BadRequest(format!("Game {} does not exist", game_id)),
        _ => err,
    })
}
