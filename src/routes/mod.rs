use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{
    handlers::{
        categories::{list_categories, questions_by_category},
        questions::{create_question, delete_question, list_questions, search_or_create},
        quizzes::play_quiz,
    },
    state::AppState,
};

/// 所有 API 路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(category_routes())
        .merge(question_routes())
        .route("/quizzes", post(play_quiz))
}

/// 分类路由
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:category_id/questions", get(questions_by_category))
}

/// 题目路由
fn question_routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(search_or_create))
        .route("/questions/add", post(create_question))
        .route("/questions/:question_id", delete(delete_question))
}
