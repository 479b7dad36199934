//! # SQLite
//!
//! 题库存储。表结构和初始题目在 `migrations/` 里, 启动时由 `sqlx::migrate!` 执行。
//!
//! 分类 id 直接使用表里的 id, 请求和响应里的分类 id 都不做加减一转换。
use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::info;

use crate::{
    error::ServerError,
    models::{Category, Question, QuestionDraft},
    quiz::{CategoryFilter, QuestionStore},
};

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 连接数据库并执行迁移, 文件不存在时创建
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, ServerError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::migrate(pool).await
    }

    /// 内存数据库, 只保留一个连接, 否则每个连接各自是一个空库
    pub async fn in_memory() -> Result<Self, ServerError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self, ServerError> {
        sqlx::migrate!().run(&pool).await?;
        info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// 所有分类
    pub async fn categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn category_exists(&self, category_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?)")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
    }

    /// 所有题目, 按 id 排序
    pub async fn questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// 某个分类下的题目
    pub async fn questions_in_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = ? ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    /// 题干包含关键字的题目, 不区分大小写
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE question LIKE '%' || ? || '%' ESCAPE '\\' ORDER BY id",
        )
        .bind(escape_like(term))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
    }

    /// 写入题目, 返回新题目的 id
    pub async fn insert_question(&self, draft: &QuestionDraft) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&draft.question)
        .bind(&draft.answer)
        .bind(draft.category)
        .bind(draft.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// 删除题目, 题目不存在时返回 false
    pub async fn delete_question(&self, question_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl QuestionStore for Database {
    async fn find_by_category(&self, filter: CategoryFilter) -> Result<Vec<Question>, sqlx::Error> {
        match filter {
            CategoryFilter::All => self.questions().await,
            CategoryFilter::Only(category_id) => self.questions_in_category(category_id).await,
        }
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
