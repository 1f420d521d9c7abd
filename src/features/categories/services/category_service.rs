use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type, created_at
            FROM categories
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories)
    }

    /// All categories as an id-to-type map. An empty store yields an empty
    /// map, still a success.
    pub async fn list_map(&self) -> Result<BTreeMap<i32, String>> {
        let categories = self.list().await?;
        Ok(categories
            .into_iter()
            .map(|c| (c.id, c.category_type))
            .collect())
    }

    /// Get category by id
    pub async fn get(&self, id: i32) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        category.ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}
