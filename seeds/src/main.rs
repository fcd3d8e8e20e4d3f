#[macro_use]
extern crate log;

use std::env;

use dotenv::dotenv;

use auth::{create_jwt, PrivateClaim};
use db::{
    get_conn, new_pool,
    models::{Category, NewUser, Player, User},
};
use errors::Error;

const CATEGORIES: &[&str] = &[
    "Strategy",
    "Family",
    "Party",
    "Cooperative",
    "Deck Building",
    "Worker Placement",
    "Abstract",
    "Dexterity",
];

fn seed_categories(conn: &diesel::PgConnection) -> Result<(), Error> {
    for label in CATEGORIES {
        match Category::find_by_label(conn, label) {
            Ok(_) => info!("Category {} already exists", label),
            Err(Error::NotFound(_)) => {
                Category::create(conn, label.to_string())?;
                info!("Created category {}", label);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn seed_player(conn: &diesel::PgConnection) -> Result<String, Error> {
    let username = env::var("SEED_USERNAME").unwrap_or_else(|_| "meeple".to_string());
    match Player::find_by_username(conn, &username) {
        Ok((player, _)) => {
            info!("Player {} already exists", username);
            return create_jwt(PrivateClaim::new(player.id, username));
        }
        Err(Error::NotFound(_)) => {}
        Err(err) => return Err(err),
    }

    let user = User::create(
        conn,
        NewUser {
            username: username.clone(),
            first_name: "Demo".to_string(),
            last_name: "Player".to_string(),
        },
    )?;
    let player = Player::create(conn, user.id, "Seeded demo player".to_string())?;
    info!("Created player {} for user {}", player.id, username);

    create_jwt(PrivateClaim::new(player.id, username))
}

fn run() -> Result<String, Error> {
    let pool = new_pool();
    let conn = get_conn(&pool)?;

    seed_categories(&conn)?;
    seed_player(&conn)
}

fn main() {
    dotenv().ok();
    env_logger::init();

    match run() {
        Ok(token) => println!("Bearer {}", token),
        Err(err) => {
            error!("Seeding failed - {:?}", err);
            std::process::exit(1);
        }
    }
}
