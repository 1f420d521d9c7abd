use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub category_type: String,
    pub created_at: DateTime<Utc>,
}
