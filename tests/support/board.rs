use std::path::Path;

use peerboard::{api, health::PeerChecker, registry::PeerRegistry, AppState};

use super::http::{spawn_app, TestServer};

/// テスト用のAppStateを作成する
#[allow(dead_code)]
pub fn test_state(peers: &[(&str, &str)], version_file: &Path) -> AppState {
    let registry = PeerRegistry::from_entries(
        peers
            .iter()
            .map(|(name, url)| (name.to_string(), url.to_string())),
    );

    AppState {
        registry,
        checker: PeerChecker::new(),
        version_file: version_file.to_path_buf(),
        service_name: "peerboard".to_string(),
    }
}

/// peerboardサーバーをテスト用に起動する
#[allow(dead_code)]
pub async fn spawn_test_board(peers: &[(&str, &str)], version_file: &Path) -> TestServer {
    spawn_app(api::create_app(test_state(peers, version_file))).await
}
