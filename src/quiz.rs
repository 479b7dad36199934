//! # Quiz
//!
//! 答题模式的出题逻辑。
//!
//! 服务端不保存答题进度: 客户端每次请求都带上已经出过的题目 id,
//! 这里先从分类里取出候选题, 去掉出过的, 再从剩下的里面均匀随机取一道。
//! 剩下的为空就返回 [`Selection::Exhausted`], 这不是错误。
use std::{collections::HashSet, future::Future};

use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;

use crate::models::{Number, Question};

/// 分类过滤条件, 0 表示全部分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "CategorySelector")]
pub enum CategoryFilter {
    All,
    Only(i64),
}

impl CategoryFilter {
    pub const ALL_SENTINEL: i64 = 0;

    /// 返回给客户端的分类 id, 全部分类时为 None
    pub fn category_id(&self) -> Option<i64> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(id) => Some(*id),
        }
    }
}

/// 请求里的分类: 可以是数字, 也可以是前端的 `{ "id": "1", "type": "Science" }`,
/// 前端的 id 来自分类对象的键, 所以可能是字符串
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategorySelector {
    Id(Number),
    Tagged { id: Number },
}

impl TryFrom<CategorySelector> for CategoryFilter {
    type Error = String;

    fn try_from(selector: CategorySelector) -> Result<Self, Self::Error> {
        let id = match selector {
            CategorySelector::Id(id) | CategorySelector::Tagged { id } => id,
        };
        let id = id
            .as_int()
            .ok_or_else(|| format!("category id {id:?} is not an integer"))?;

        match id {
            Self::ALL_SENTINEL => Ok(CategoryFilter::All),
            id if id > 0 => Ok(CategoryFilter::Only(id)),
            id => Err(format!("invalid category id {id}")),
        }
    }
}

/// 出题结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Question(Question),
    /// 候选题都已经出过
    Exhausted,
}

/// 按分类取题
pub trait QuestionStore {
    fn find_by_category(
        &self,
        filter: CategoryFilter,
    ) -> impl Future<Output = Result<Vec<Question>, sqlx::Error>> + Send;
}

/// 从候选题里去掉已经出过的, 再均匀随机取一道
pub fn select_unseen<R>(candidates: &[Question], previous: &HashSet<i64>, rng: &mut R) -> Selection
where
    R: Rng + ?Sized,
{
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();

    match unseen.choose(rng) {
        Some(question) => Selection::Question((*question).clone()),
        None => Selection::Exhausted,
    }
}

/// 取下一道题, 随机数用当前线程的生成器
pub async fn next_question<S>(
    store: &S,
    filter: CategoryFilter,
    previous: &HashSet<i64>,
) -> Result<Selection, sqlx::Error>
where
    S: QuestionStore + Sync,
{
    let candidates = store.find_by_category(filter).await?;

    Ok(select_unseen(&candidates, previous, &mut rand::thread_rng()))
}
