use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{PlayQuizDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Play a quiz round
///
/// Picks one random question whose id is not in `previous_questions`,
/// restricted to `quiz_category.id` when that id is non-null. The selector
/// itself is required; a null question means the quiz is exhausted.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = PlayQuizDto,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = QuizResponseDto),
        (status = 400, description = "Missing category selector", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<PlayQuizDto>,
) -> Result<Json<QuizResponseDto>> {
    let Some(quiz_category) = dto.quiz_category else {
        return Err(AppError::BadRequest(
            "Quiz category selector is required".to_string(),
        ));
    };

    let question = service
        .next_question(quiz_category.id, &dto.previous_questions)
        .await?;

    Ok(Json(QuizResponseDto {
        success: true,
        question: question.map(Into::into),
    }))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::test_app;
    use axum_test::TestServer;

    #[tokio::test]
    async fn missing_category_selector_is_a_bad_request() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server
            .post("/quizzes")
            .json(&serde_json::json!({"previous_questions": []}))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        response.assert_json(&serde_json::json!({
            "success": false,
            "error": 400,
            "message": "BAD_REQUEST",
        }));
    }

    #[tokio::test]
    async fn quizzes_route_rejects_unsupported_methods() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.get("/quizzes").await;
        response.assert_status(axum::http::StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    #[ignore = "requires a live database (DATABASE_URL)"]
    async fn a_quiz_over_an_unknown_category_is_immediately_exhausted() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server
            .post("/quizzes")
            .json(&serde_json::json!({
                "previous_questions": [],
                "quiz_category": {"id": 9999},
            }))
            .await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "success": true,
            "question": null,
        }));
    }
}
