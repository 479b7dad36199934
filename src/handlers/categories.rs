use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;

use crate::{
    error::AppError,
    models::{category_labels, Question},
    pagination::{page_window, PageParams},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}

/// 所有分类
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.db.categories().await?;
    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_labels(categories),
    }))
}

/// 分类下的题目
pub async fn questions_by_category(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let Path(category_id) = path?;
    let Query(params) = query?;
    let page = params.number()?;

    let selection = state.db.questions_in_category(category_id).await?;
    if selection.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page_window(&selection, page, state.questions_per_page).to_vec(),
        total_questions: selection.len(),
        current_category: category_id,
    }))
}
