use actix_web::{error, web, HttpRequest, HttpResponse};

use errors::{Error, ErrorResponse};

use crate::middleware::Auth;

pub mod categories;
pub mod entries;
pub mod games;
pub mod pictures;
pub mod ratings;
pub mod reviews;

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    Error::BadRequest(err.to_string()).into()
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    Error::BadRequest(err.to_string()).into()
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(not_found));
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .service(
            web::scope("/games")
                .wrap(Auth)
                .route("", web::get().to(games::list))
                .route("", web::post().to(games::create))
                .route("/{id}", web::get().to(games::retrieve))
                .route("/{id}", web::put().to(games::update))
                .route("/{id}", web::delete().to(games::destroy)),
        )
        .service(
            web::scope("/categories")
                .wrap(Auth)
                .route("", web::get().to(categories::list))
                .route("", web::post().to(categories::create))
                .route("/{id}", web::get().to(categories::retrieve))
                .route("/{id}", web::put().to(categories::update))
                .route("/{id}", web::delete().to(categories::destroy)),
        )
        .service(
            web::scope("/ratings")
                .wrap(Auth)
                .route("", web::get().to(ratings::list))
                .route("", web::post().to(ratings::create))
                .route("/{id}", web::get().to(ratings::retrieve))
                .route("/{id}", web::put().to(ratings::update))
                .route("/{id}", web::delete().to(ratings::destroy)),
        )
        .service(
            web::scope("/reviews")
                .wrap(Auth)
                .route("", web::get().to(reviews::list))
                .route("", web::post().to(reviews::create))
                .route("/{id}", web::get().to(reviews::retrieve))
                .route("/{id}", web::put().to(reviews::update))
                .route("/{id}", web::delete().to(reviews::destroy)),
        )
        .service(
            web::scope("/entries")
                .wrap(Auth)
                .route("", web::get().to(entries::list))
                .route("", web::post().to(entries::create))
                .route("/{id}", web::get().to(entries::retrieve))
                .route("/{id}", web::put().to(entries::update))
                .route("/{id}", web::delete().to(entries::destroy)),
        )
        .service(
            web::scope("/pictures")
                .wrap(Auth)
                .route("", web::get().to(pictures::list))
                .route("", web::post().to(pictures::create))
                .route("/{id}", web::get().to(pictures::retrieve))
                .route("/{id}", web::put().to(pictures::update))
                .route("/{id}", web::delete().to(pictures::destroy)),
        );
}
