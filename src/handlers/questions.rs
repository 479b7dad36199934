use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::AppError,
    models::{category_labels, NewQuestion, Question},
    pagination::{page_window, PageParams},
    state::AppState,
};

/// POST /questions 的请求体, 带 searchTerm 时是搜索, 否则是新增
#[derive(Debug, Deserialize)]
pub struct QuestionsPost {
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub new_question: NewQuestion,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// 分页获取题目
pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let Query(params) = query?;
    let page = params.number()?;

    let selection = state.db.questions().await?;
    let current = page_window(&selection, page, state.questions_per_page);
    if current.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = state.db.categories().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len(),
        current_category: None,
        categories: category_labels(categories),
    }))
}

/// 搜索或新增题目
pub async fn search_or_create(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<QuestionsPost>, JsonRejection>,
) -> Result<Response, AppError> {
    let Query(params) = query?;
    let Json(body) = payload?;
    let page = params.number()?;

    match body.search_term {
        Some(term) => {
            let response = search(&state, &term, page).await?;
            Ok(Json(response).into_response())
        }
        None => {
            let response = create(&state, body.new_question, page).await?;
            Ok(Json(response).into_response())
        }
    }
}

/// 新增题目
pub async fn create_question(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    let Query(params) = query?;
    let Json(new_question) = payload?;
    let page = params.number()?;

    Ok(Json(create(&state, new_question, page).await?))
}

/// 删除题目
pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<DeletedResponse>, AppError> {
    let Path(question_id) = path?;
    let Query(params) = query?;
    let page = params.number()?;

    if !state.db.delete_question(question_id).await? {
        return Err(AppError::NotFound);
    }
    info!("Deleted question {question_id}");

    let selection = state.db.questions().await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
        questions: page_window(&selection, page, state.questions_per_page).to_vec(),
        total_questions: selection.len(),
    }))
}

async fn search(state: &AppState, term: &str, page: usize) -> Result<SearchResponse, AppError> {
    let selection = state.db.search_questions(term.trim()).await?;

    Ok(SearchResponse {
        success: true,
        questions: page_window(&selection, page, state.questions_per_page).to_vec(),
        total_questions: selection.len(),
        current_category: None,
    })
}

async fn create(
    state: &AppState,
    new_question: NewQuestion,
    page: usize,
) -> Result<CreatedResponse, AppError> {
    let draft = new_question.validate()?;

    if !state.db.category_exists(draft.category).await? {
        return Err(AppError::Unprocessable(format!(
            "category {} does not exist",
            draft.category
        )));
    }

    let id = state.db.insert_question(&draft).await?;
    info!("Created question {id} in category {}", draft.category);

    let selection = state.db.questions().await?;

    Ok(CreatedResponse {
        success: true,
        created: id,
        questions: page_window(&selection, page, state.questions_per_page).to_vec(),
        total_questions: selection.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_term_selects_search() {
        let body: QuestionsPost =
            serde_json::from_value(serde_json::json!({ "searchTerm": "title" })).unwrap();

        assert_eq!(body.search_term.as_deref(), Some("title"));
    }

    #[test]
    fn question_fields_select_create() {
        let body: QuestionsPost = serde_json::from_value(serde_json::json!({
            "question": "Who discovered penicillin?",
            "answer": "Alexander Fleming",
            "category": "1",
            "difficulty": 3
        }))
        .unwrap();

        assert!(body.search_term.is_none());
        let draft = body.new_question.validate().unwrap();
        assert_eq!(draft.category, 1);
        assert_eq!(draft.difficulty, 3);
    }
}
