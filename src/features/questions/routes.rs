use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::services::CategoryService;
use crate::features::questions::handlers::{self, QuestionState};
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
///
/// The category-filtered listing lives here rather than in the categories
/// feature because its payload is questions; the category service is only
/// consulted for the existence precondition and the category map.
pub fn routes(
    question_service: Arc<QuestionService>,
    category_service: Arc<CategoryService>,
) -> Router {
    let state = QuestionState {
        question_service,
        category_service,
    };

    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route(
            "/questions/{id}",
            axum::routing::delete(handlers::delete_question),
        )
        .route("/questions/filter", post(handlers::search_questions))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_questions_by_category),
        )
        .with_state(state)
}
