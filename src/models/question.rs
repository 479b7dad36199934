use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 难度范围
pub const DIFFICULTY_RANGE: RangeInclusive<i64> = 1..=5;

/// 题目
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// 新增题目的请求体, 字段在 validate 之前都是可选的
#[derive(Debug, Default, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<Number>,
    pub difficulty: Option<Number>,
}

/// 前端下拉框提交的数字可能是字符串
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Text(String),
}

impl Number {
    /// 数字或数字字符串转成整数, 其他字符串返回 None
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Number::Int(value) => Some(*value),
            Number::Text(text) => text.trim().parse().ok(),
        }
    }

    fn to_int(&self, field: &str) -> Result<i64, AppError> {
        self.as_int()
            .ok_or_else(|| AppError::Unprocessable(format!("{field} must be an integer")))
    }
}

/// 校验通过、等待写入的题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn validate(self) -> Result<QuestionDraft, AppError> {
        let question = required_text(self.question, "question")?;
        let answer = required_text(self.answer, "answer")?;
        let category = required_number(self.category.as_ref(), "category")?;
        let difficulty = required_number(self.difficulty.as_ref(), "difficulty")?;

        if category <= 0 {
            return Err(AppError::Unprocessable(
                "category must be a positive id".to_string(),
            ));
        }
        if !DIFFICULTY_RANGE.contains(&difficulty) {
            return Err(AppError::Unprocessable(format!(
                "difficulty must be between {} and {}",
                DIFFICULTY_RANGE.start(),
                DIFFICULTY_RANGE.end()
            )));
        }

        Ok(QuestionDraft {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.map(|text| text.trim().to_string()) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AppError::Unprocessable(format!("{field} is required"))),
    }
}

fn required_number(value: Option<&Number>, field: &str) -> Result<i64, AppError> {
    value
        .ok_or_else(|| AppError::Unprocessable(format!("{field} is required")))?
        .to_int(field)
}
