//! サーバー初期化ロジック
//!
//! レジストリ構築、HTTPクライアント作成などサーバー起動に必要な
//! コンポーネントの初期化を担当する。

use crate::health::PeerChecker;
use crate::registry::PeerRegistry;
use crate::{config, AppState};
use tracing::info;

/// サーバー初期化を実行する
///
/// ピアレジストリは起動時にここで一度だけ構築され、以後は
/// 読み取り専用で各リクエストハンドラーに共有される。
pub fn initialize() -> AppState {
    info!("Peerboard v{}", env!("CARGO_PKG_VERSION"));

    let registry = PeerRegistry::from_env();
    info!(peers = registry.len(), "Peer registry initialized");

    AppState {
        registry,
        checker: PeerChecker::new(),
        version_file: config::version_file_path(),
        service_name: config::service_name(),
    }
}
