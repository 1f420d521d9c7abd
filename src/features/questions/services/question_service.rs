use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::CreateQuestionDto;
use crate::features::questions::models::Question;
use crate::shared::types::PageQuery;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty, created_at";

/// Service for question operations
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One fixed-size window over all questions ordered by ascending id,
    /// together with the full dataset count. A page below 1 selects nothing.
    pub async fn list_page(&self, page: &PageQuery) -> Result<(Vec<Question>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count questions: {:?}", e);
                AppError::Database(e)
            })?;

        let Some(window) = page.window() else {
            return Ok((Vec::new(), total));
        };

        let questions = sqlx::query_as::<_, Question>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions (page {}): {:?}", page.page, e);
            AppError::Database(e)
        })?;

        Ok((questions, total))
    }

    /// Case-insensitive substring search over the prompt text, ordered by
    /// ascending id. A blank or absent term matches every question.
    pub async fn search(&self, term: Option<&str>) -> Result<(Vec<Question>, i64)> {
        let questions = match term {
            Some(term) if !term.is_empty() => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Question>(&format!(
                    r#"
                    SELECT {QUESTION_COLUMNS}
                    FROM questions
                    WHERE question ILIKE $1
                    ORDER BY id ASC
                    "#
                ))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await
            }
            _ => {
                sqlx::query_as::<_, Question>(&format!(
                    r#"
                    SELECT {QUESTION_COLUMNS}
                    FROM questions
                    ORDER BY id ASC
                    "#
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })?;

        let total = questions.len() as i64;
        Ok((questions, total))
    }

    /// All questions of one category, ordered by ascending id. Callers that
    /// require the category to exist check that themselves first.
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            WHERE category = $1
            ORDER BY id ASC
            "#
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to list questions for category {}: {:?}",
                category_id,
                e
            );
            AppError::Database(e)
        })?;

        Ok(questions)
    }

    /// Insert a question and return its assigned id. Fields are bound as
    /// given; NULLs and dangling category ids are rejected by the store and
    /// surface as Internal.
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(dto.question)
        .bind(dto.answer)
        .bind(dto.category)
        .bind(dto.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create question: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Created question {}", id);
        Ok(id)
    }

    /// Delete a question by id. Existence is judged from the affected-row
    /// count, so concurrent deletes of the same id race safely.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        tracing::info!("Deleted question {}", id);
        Ok(())
    }
}
