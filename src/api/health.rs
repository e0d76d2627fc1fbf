//! 自サービスのヘルスチェックエンドポイント

use crate::types::{HealthResponse, PeerState};
use crate::AppState;
use axum::{extract::State, Json};

/// GET /health
///
/// 自サービスの稼働状態とバージョンを返す。バージョンファイルは
/// リクエスト毎に読み直す。
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: PeerState::Up,
        version: crate::version::read_version(&state.version_file),
    })
}
