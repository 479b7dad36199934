use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info};

use crate::{
    error::AppError,
    models::{QuizRequest, QuizResponse},
    quiz::{next_question, Selection},
    state::AppState,
};

/// 答题模式: 取一道没出过的题
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(request) = payload?;
    let filter = request.quiz_category;
    let previous: HashSet<i64> = request.previous_questions.into_iter().collect();

    let question = match next_question(&state.db, filter, &previous).await? {
        Selection::Question(question) => {
            debug!(
                "serving question {} ({} already served)",
                question.id,
                previous.len()
            );
            Some(question)
        }
        Selection::Exhausted => {
            info!(
                "no unseen questions left for {:?} after {} served",
                filter,
                previous.len()
            );
            None
        }
    };

    Ok(Json(QuizResponse {
        success: true,
        question,
        category: filter.category_id(),
    }))
}
