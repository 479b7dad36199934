use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 题目分类
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub label: String,
}

/// 分类 id -> 名称, 按 id 排序
pub fn category_labels(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories
        .into_iter()
        .map(|category| (category.id, category.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_keyed_by_store_id() {
        let labels = category_labels(vec![
            Category {
                id: 2,
                label: "Art".to_string(),
            },
            Category {
                id: 1,
                label: "Science".to_string(),
            },
        ]);

        assert_eq!(labels.get(&1).map(String::as_str), Some("Science"));
        assert_eq!(labels.get(&2).map(String::as_str), Some("Art"));
        assert_eq!(
            serde_json::to_value(&labels).unwrap(),
            serde_json::json!({ "1": "Science", "2": "Art" })
        );
    }

    #[test]
    fn category_serializes_label_as_type() {
        let category = Category {
            id: 6,
            label: "Sports".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            serde_json::json!({ "id": 6, "type": "Sports" })
        );
    }
}
