pub mod categories;
pub mod questions;
pub mod quizzes;

use axum::{
    http::{header::ALLOW, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// 未知路由
pub async fn fallback() -> AppError {
    AppError::NotFound
}

/// 路由存在但方法不对时, axum 返回空的 405, 这里换成 JSON 错误, 保留 Allow 头
pub async fn method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let mut rewritten = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(ALLOW, allow);
    }
    rewritten
}
