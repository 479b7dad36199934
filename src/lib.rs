//! # Trivia
//!
//! 问答游戏的 HTTP API: 分类列表、题目分页和搜索、新增和删除题目、按分类筛选,
//! 以及答题模式下不重复地随机出题。
//!
//! ## 答题模式
//!
//! 服务端不保存答题进度。客户端每次 `POST /quizzes` 都带上分类和已出过的题目 id,
//! 见 [`quiz`]。
//!
//! ## 配置
//!
//! | 环境变量 | 默认值 |
//! |---|---|
//! | `TRIVIA_PORT` | `8080` |
//! | `DATABASE_URL` | `sqlite://trivia.db` |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |
//! | `QUESTIONS_PER_PAGE` | `10` |
//!
//! 日志级别用 `RUST_LOG` 控制, 默认 `info`。
use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware::map_response,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod quiz;
pub mod routes;
pub mod state;

pub use config::Config;
pub use database::Database;
pub use error::{AppError, ServerError};
pub use state::AppState;

/// 组装路由、CORS、404 和 405
pub fn app(state: AppState) -> Router {
    routes::routes()
        .fallback(handlers::fallback)
        .layer(map_response(handlers::method_not_allowed))
        .layer(cors())
        .with_state(state)
}

pub async fn start_server() -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    info!("Loading configuration...");
    let config = Config::load()?;

    info!("Opening database {}", config.database_url);
    let state = AppState::new(&config).await?;

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on: {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
