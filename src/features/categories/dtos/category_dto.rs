use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Wire form of a single category: `{id, type}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub category_type: String,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            category_type: c.category_type,
        }
    }
}

/// Response for `GET /categories`: every category keyed by its id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponseDto {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}
