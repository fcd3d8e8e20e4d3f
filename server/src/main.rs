#[macro_use]
extern crate log;
#[macro_use]
extern crate validator_derive;

use std::env;

use actix_cors::Cors;
use actix_web::{
    http,
    middleware::Logger,
    web::Data,
    App, HttpServer,
};
use dotenv::dotenv;

mod handlers;
mod middleware;
mod routes;
mod serializers;
#[cfg(test)]
mod tests;
mod validate;

use crate::routes::routes;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

fn cors() -> Cors {
    let cors = match env::var("CLIENT_HOST") {
        Ok(host) => Cors::default().allowed_origin(&host),
        Err(_) => Cors::default().allow_any_origin(),
    };

    cors.allow_any_method()
        .allowed_headers(vec![
            http::header::AUTHORIZATION,
            http::header::ACCEPT,
            http::header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool();
    let bind_address =
        env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

    info!("Starting gamer rater api on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .wrap(auth::get_identity_service())
            .app_data(Data::new(pool.clone()))
            .configure(routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
