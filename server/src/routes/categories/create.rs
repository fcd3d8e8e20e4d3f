use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use auth::get_claim_from_identity;
use db::{get_conn, models::Category, PgPool};
use errors::Error;

use crate::handlers::authenticated_player;
use crate::serializers::CategoryResponse;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = "1", max = "50"))]
    pub label: String,
}

pub async fn create(
    id: Identity,
    pool: Data<PgPool>,
    params: Json<CategoryRequest>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let (claim, _) = get_claim_from_identity(id)?;
    let label = params.into_inner().label;

    let category = block(move || -> Result<Category, Error> {
        let conn = get_conn(&pool)?;
        authenticated_player(&conn, &claim)?;
        Category::create(&conn, label)
    })
    .await??;

    info!("Created category {}", category.label);

    Ok(HttpResponse::Created().json(CategoryResponse::from(category)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use errors::ErrorResponse;

    use crate::serializers::CategoryResponse;
    use crate::tests::fixtures::{create_player, delete_categories, delete_player};
    use crate::tests::helpers::{get_test_conn, test_post};

    #[actix_rt::test]
    async fn test_create_category() {
        let conn = get_test_conn();
        let player = create_player(&conn, "create_category");

        let (status, category): (u16, CategoryResponse) = test_post(
            "/categories",
            json!({ "label": "Deck Building" }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(category.label, "Deck Building");

        delete_categories(&conn, &[category.id]);
        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_create_category_label_too_long() {
        let conn = get_test_conn();
        let player = create_player(&conn, "create_category_long");

        let (status, body): (u16, ErrorResponse) = test_post(
            "/categories",
            json!({ "label": "x".repeat(51) }),
            Some(player.token.clone()),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body.errors, vec!["label is invalid".to_string()]);

        delete_player(&conn, &player);
    }

    #[actix_rt::test]
    async fn test_create_category_requires_token() {
        let (status, body): (u16, ErrorResponse) =
            test_post("/categories", json!({ "label": "Anonymous" }), None).await;

        assert_eq!(status, 401);
        assert_eq!(body.errors[0], "Unauthorized");
    }
}
