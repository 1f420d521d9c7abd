use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryListResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
///
/// Returns every category as an id-to-type map.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Map of category id to type", body = CategoryListResponseDto),
        (status = 500, description = "Database failure", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListResponseDto>> {
    let categories = service.list_map().await?;
    Ok(Json(CategoryListResponseDto {
        success: true,
        categories,
    }))
}
