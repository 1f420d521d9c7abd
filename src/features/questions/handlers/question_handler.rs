use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::categories::services::CategoryService;
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, CreateQuestionDto, CreateQuestionResponseDto,
    DeleteQuestionResponseDto, QuestionDto, QuestionListResponseDto, SearchQuestionsDto,
    SearchQuestionsResponseDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// State for question handlers
#[derive(Clone)]
pub struct QuestionState {
    pub question_service: Arc<QuestionService>,
    pub category_service: Arc<CategoryService>,
}

/// List questions for a page
///
/// Returns a ten-question window over all questions in ascending-id order,
/// plus the category map and the full dataset count. A page with no
/// questions in its window is a not-found, whether the page is past the end
/// or below 1.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponseDto),
        (status = 404, description = "Page window is empty", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(state): State<QuestionState>,
    AppQuery(page): AppQuery<PageQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let (questions, total_questions) = state.question_service.list_page(&page).await?;

    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions on page {}",
            page.page
        )));
    }

    let categories = state.category_service.list_map().await?;

    Ok(Json(QuestionListResponseDto {
        success: true,
        current_category: None,
        categories,
        questions: questions.into_iter().map(QuestionDto::from).collect(),
        total_questions,
    }))
}

/// Create a question
///
/// The payload must carry at least one recognized field; beyond that, field
/// values pass straight to the store, whose constraints decide.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 201, description = "Question created", body = CreateQuestionResponseDto),
        (status = 400, description = "Empty payload", body = ErrorResponse),
        (status = 500, description = "Store constraint violation", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(state): State<QuestionState>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<(StatusCode, Json<CreateQuestionResponseDto>)> {
    if dto.is_empty() {
        return Err(AppError::BadRequest(
            "Question payload is empty".to_string(),
        ));
    }

    let id = state.question_service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateQuestionResponseDto { success: true, id }),
    ))
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(state): State<QuestionState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeleteQuestionResponseDto>> {
    state.question_service.delete(id).await?;
    Ok(Json(DeleteQuestionResponseDto { success: true }))
}

/// Search questions
///
/// Case-insensitive substring match against the prompt text. A blank or
/// absent term matches everything; zero matches is still a success.
#[utoipa::path(
    post,
    path = "/questions/filter",
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponseDto),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(state): State<QuestionState>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<SearchQuestionsResponseDto>> {
    let (questions, total_questions) = state
        .question_service
        .search(dto.search_term.as_deref())
        .await?;

    Ok(Json(SearchQuestionsResponseDto {
        success: true,
        questions: questions.into_iter().map(QuestionDto::from).collect(),
        total_questions,
    }))
}

/// List questions of one category
///
/// The category must exist; the full filtered set is returned unpaginated.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions of the category", body = CategoryQuestionsResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(state): State<QuestionState>,
    AppPath(category_id): AppPath<i32>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let category = state.category_service.get(category_id).await?;
    let questions = state.question_service.list_by_category(category_id).await?;
    let total_questions = questions.len() as i64;

    Ok(Json(CategoryQuestionsResponseDto {
        success: true,
        questions: questions.into_iter().map(QuestionDto::from).collect(),
        total_questions,
        current_category: category.into(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::test_app;
    use axum_test::TestServer;
    use fake::{faker::lorem::en::Sentence, Fake};

    fn canonical(code: u16, message: &str) -> serde_json::Value {
        serde_json::json!({
            "success": false,
            "error": code,
            "message": message,
        })
    }

    #[tokio::test]
    async fn empty_create_payload_is_a_bad_request() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.post("/questions").json(&serde_json::json!({})).await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        response.assert_json(&canonical(400, "BAD_REQUEST"));
    }

    #[tokio::test]
    async fn create_payload_with_only_unknown_fields_is_a_bad_request() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server
            .post("/questions")
            .json(&serde_json::json!({"prompt": "not a recognized field"}))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        response.assert_json(&canonical(400, "BAD_REQUEST"));
    }

    #[tokio::test]
    async fn malformed_json_body_is_a_bad_request() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server
            .post("/questions/filter")
            .content_type("application/json")
            .text("{not json")
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        response.assert_json(&canonical(400, "BAD_REQUEST"));
    }

    #[tokio::test]
    async fn non_integer_question_id_is_a_not_found() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.delete("/questions/abc").await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
        response.assert_json(&canonical(404, "NOT_FOUND"));
    }

    #[tokio::test]
    async fn non_integer_category_id_is_a_not_found() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.get("/categories/science/questions").await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
        response.assert_json(&canonical(404, "NOT_FOUND"));
    }

    #[tokio::test]
    async fn unknown_path_renders_the_canonical_404_shape() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.get("/answers").await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
        response.assert_json(&canonical(404, "NOT_FOUND"));
    }

    #[tokio::test]
    async fn unsupported_methods_render_the_canonical_405_shape() {
        let server = TestServer::new(test_app()).unwrap();

        for (method, path) in [
            ("PUT", "/questions"),
            ("DELETE", "/questions/filter"),
            ("POST", "/categories/1/questions"),
        ] {
            let response = match method {
                "PUT" => server.put(path).await,
                "DELETE" => server.delete(path).await,
                _ => server.post(path).await,
            };
            response.assert_status(axum::http::StatusCode::METHOD_NOT_ALLOWED);
            response.assert_json(&canonical(405, "METHOD_NOT_ALLOWED"));
        }
    }

    #[tokio::test]
    async fn responses_carry_permissive_cors_headers() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server
            .get("/questions-or-anything")
            .add_header("origin", "http://example.com")
            .await;
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn non_numeric_page_is_a_bad_request() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.get("/questions").add_query_param("page", "two").await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        response.assert_json(&canonical(400, "BAD_REQUEST"));
    }

    #[tokio::test]
    #[ignore = "requires a live database (DATABASE_URL)"]
    async fn create_list_and_delete_round_trip() {
        let server = TestServer::new(test_app()).unwrap();

        let prompt: String = Sentence(3..8).fake();
        let created = server
            .post("/questions")
            .json(&serde_json::json!({
                "question": prompt,
                "answer": "42",
                "category": 1,
                "difficulty": 2,
            }))
            .await;
        created.assert_status(axum::http::StatusCode::CREATED);
        let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

        // The new question is findable by its prompt text.
        let found = server
            .post("/questions/filter")
            .json(&serde_json::json!({"searchTerm": prompt}))
            .await;
        found.assert_status_ok();
        let body: serde_json::Value = found.json();
        assert_eq!(body["total_questions"], 1);
        assert_eq!(body["questions"][0]["id"], id);
        assert_eq!(body["questions"][0]["answer"], "42");

        // First delete succeeds, second is a not-found.
        let deleted = server.delete(&format!("/questions/{}", id)).await;
        deleted.assert_status_ok();
        deleted.assert_json(&serde_json::json!({"success": true}));

        let again = server.delete(&format!("/questions/{}", id)).await;
        again.assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[ignore = "requires a live database (DATABASE_URL)"]
    async fn search_with_zero_matches_is_a_success() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server
            .post("/questions/filter")
            .json(&serde_json::json!({"searchTerm": "zzz-no-question-says-this"}))
            .await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "success": true,
            "questions": [],
            "total_questions": 0,
        }));
    }

    #[tokio::test]
    #[ignore = "requires a live database (DATABASE_URL)"]
    async fn unknown_category_listing_is_a_not_found() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.get("/categories/9999/questions").await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
        response.assert_json(&canonical(404, "NOT_FOUND"));
    }
}
