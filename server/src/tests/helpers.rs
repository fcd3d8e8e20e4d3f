use std::env;
use std::sync::OnceLock;

use actix_web::{
    test,
    web::{Bytes, Data},
    App,
};
use dotenv::dotenv;
use serde::{de::DeserializeOwned, Serialize};

use auth::{create_jwt, get_identity_service, PrivateClaim};
use db::{Connection, PgPool};

use crate::routes::routes;

fn init_env() {
    dotenv().ok();
    if env::var("JWT_KEY").is_err() {
        env::set_var("JWT_KEY", "gamer-rater-test-key");
    }
}

/// One pool for the whole test binary, so parallel tests share connections.
pub fn get_pool() -> PgPool {
    static POOL: OnceLock<PgPool> = OnceLock::new();
    POOL.get_or_init(|| {
        init_env();
        db::new_pool()
    })
    .clone()
}

pub fn get_test_conn() -> Connection {
    db::get_conn(&get_pool()).unwrap()
}

async fn send(mut req: test::TestRequest, token: Option<String>) -> (u16, Bytes) {
    let app = test::init_service(
        App::new()
            .wrap(get_identity_service())
            .app_data(Data::new(get_pool()))
            .configure(routes),
    )
    .await;

    if let Some(token) = token {
        req = req.insert_header(("Authorization", format!("Bearer {}", token)));
    }

    let res = test::call_service(&app, req.to_request()).await;

    let status = res.status().as_u16();
    let body = test::read_body(res).await;

    (status, body)
}

fn read_json<R>(status: u16, body: Bytes) -> R
where
    R: DeserializeOwned,
{
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "read_response_json failed during deserialization. response: {} status: {}",
            String::from_utf8(body.to_vec())
                .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
            status
        )
    })
}

/// Helper for HTTP GET integration tests
pub async fn test_get<R>(route: &str, token: Option<String>) -> (u16, R)
where
    R: DeserializeOwned,
{
    let (status, body) = send(test::TestRequest::get().uri(route), token).await;

    (status, read_json(status, body))
}

/// Helper for HTTP POST integration tests
pub async fn test_post<T: Serialize, R>(
    route: &str,
    params: T,
    token: Option<String>,
) -> (u16, R)
where
    R: DeserializeOwned,
{
    let (status, body) = send(
        test::TestRequest::post().set_json(&params).uri(route),
        token,
    )
    .await;

    (status, read_json(status, body))
}

/// Helper for HTTP PUT integration tests, returns the status only
pub async fn test_put<T: Serialize>(route: &str, params: T, token: Option<String>) -> u16 {
    let (status, _) = send(test::TestRequest::put().set_json(&params).uri(route), token).await;

    status
}

/// Helper for HTTP DELETE integration tests, returns the status only
pub async fn test_delete(route: &str, token: Option<String>) -> u16 {
    let (status, _) = send(test::TestRequest::delete().uri(route), token).await;

    status
}

pub fn get_auth_token(private_claim: PrivateClaim) -> String {
    init_env();
    create_jwt(private_claim).unwrap()
}
