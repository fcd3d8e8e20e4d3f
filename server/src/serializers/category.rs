use serde::{Deserialize, Serialize};

use db::models::Category;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub label: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id,
            label: category.label,
        }
    }
}
