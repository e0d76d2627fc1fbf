//! REST APIハンドラー
//!
//! ルーティング定義とハンドラー群

pub mod dashboard;
pub mod health;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// アプリケーションのルーターを構築する
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::home))
        .route("/api/status", get(dashboard::status))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
