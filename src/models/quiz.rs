use serde::{Deserialize, Serialize};

use super::Question;
use crate::quiz::CategoryFilter;

/// 答题请求, 已出过的题目由客户端保存
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(alias = "category")]
    pub quiz_category: CategoryFilter,
    #[serde(alias = "previousQuestions")]
    pub previous_questions: Vec<i64>,
}

/// 答题响应, question 为 null 表示题目已经出完
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    pub category: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frontend_payload() {
        let request: QuizRequest = serde_json::from_value(serde_json::json!({
            "quiz_category": { "type": "Art", "id": 2 },
            "previous_questions": [16, 17]
        }))
        .unwrap();

        assert_eq!(request.quiz_category, CategoryFilter::Only(2));
        assert_eq!(request.previous_questions, vec![16, 17]);
    }

    #[test]
    fn parses_camel_case_aliases() {
        let request: QuizRequest = serde_json::from_value(serde_json::json!({
            "category": 0,
            "previousQuestions": []
        }))
        .unwrap();

        assert_eq!(request.quiz_category, CategoryFilter::All);
        assert!(request.previous_questions.is_empty());
    }

    #[test]
    fn previous_questions_are_required() {
        let missing = serde_json::from_value::<QuizRequest>(serde_json::json!({
            "quiz_category": { "type": "Art", "id": 2 }
        }));
        let null = serde_json::from_value::<QuizRequest>(serde_json::json!({
            "quiz_category": 2,
            "previous_questions": null
        }));
        let strings = serde_json::from_value::<QuizRequest>(serde_json::json!({
            "quiz_category": 2,
            "previous_questions": ["a"]
        }));

        assert!(missing.is_err());
        assert!(null.is_err());
        assert!(strings.is_err());
    }

    #[test]
    fn exhausted_response_has_null_question() {
        let response = QuizResponse {
            success: true,
            question: None,
            category: Some(3),
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "success": true, "question": null, "category": 3 })
        );
    }
}
