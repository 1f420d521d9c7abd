use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionDto;

/// Category selector inside the quiz payload. A null id means "all
/// categories"; any concrete id filters, even one no category has.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    pub id: Option<i32>,
}

/// Payload for `POST /quizzes`. The selector must be present, even as
/// `{"id": null}`; the previous-question list defaults to empty.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlayQuizDto {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategoryDto>,
}

/// Response for `POST /quizzes`. A null question means the quiz is
/// exhausted and is still a success.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    pub question: Option<QuestionDto>,
}
