use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::dtos::CategoryDto;
use crate::features::questions::models::Question;

/// Wire form of a question: `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Payload for creating a question. No field-level validation happens here;
/// absent fields bind as NULL and the store's constraints decide.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl CreateQuestionDto {
    /// True when no recognized field is present, i.e. the body was `{}` or
    /// contained only unknown keys.
    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.answer.is_none()
            && self.category.is_none()
            && self.difficulty.is_none()
    }
}

/// Payload for `POST /questions/filter`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Response for `GET /questions?page=N`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub current_category: Option<CategoryDto>,
    pub categories: BTreeMap<i32, String>,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
}

/// Response for `POST /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponseDto {
    pub success: bool,
    pub id: i32,
}

/// Response for `DELETE /questions/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub success: bool,
}

/// Response for `POST /questions/filter`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
}

/// Response for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    pub current_category: CategoryDto,
}
