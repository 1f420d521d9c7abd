use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for question
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
    pub created_at: DateTime<Utc>,
}
