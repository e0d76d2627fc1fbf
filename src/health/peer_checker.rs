//! ピアヘルスチェッカー
//!
//! 各ピアの `GET <base_url>/health` を短いタイムアウト付きで呼び出し、
//! 結果を `{up|down, version}` に還元する。失敗は該当ピアのdown判定に
//! とどめ、呼び出し元にエラーを返すことはない。

use crate::common::{BoardError, BoardResult};
use crate::registry::PeerRegistry;
use crate::types::{PeerHealth, PeerStatus, VERSION_UNKNOWN};
use reqwest::{Client, StatusCode};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// プローブのタイムアウト（秒）
const PROBE_TIMEOUT_SECS: u64 = 1;

/// ピアヘルスチェッカー
///
/// タイムアウト設定済みの共有HTTPクライアントを保持する。
#[derive(Clone)]
pub struct PeerChecker {
    /// HTTPクライアント
    client: Client,
}

impl Default for PeerChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PeerChecker {
    /// 新しいヘルスチェッカーを作成
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// 全ピアを順番にプローブし、名前→結果のマッピングを返す
    ///
    /// 並列化・打ち切りは行わないため、全ピア到達不能時の所要時間は
    /// おおよそ ピア数 × タイムアウト となる。
    pub async fn check_all(&self, registry: &PeerRegistry) -> BTreeMap<String, PeerStatus> {
        let mut statuses = BTreeMap::new();

        for (name, base_url) in registry.iter() {
            let status = self.probe(name, base_url).await;
            statuses.insert(name.clone(), status);
        }

        statuses
    }

    /// ピア1件をプローブする
    ///
    /// ネットワークエラー・タイムアウト・非200応答はすべて down に還元する。
    pub async fn probe(&self, name: &str, base_url: &str) -> PeerStatus {
        let start = Instant::now();

        match self.fetch_version(base_url).await {
            Ok(version) => {
                let latency_ms = start.elapsed().as_millis() as u32;
                PeerStatus::up(version, latency_ms)
            }
            Err(e) => {
                debug!(peer = name, error = %e, "Health probe failed");
                PeerStatus::down()
            }
        }
    }

    /// `GET <base_url>/health` を実行してバージョン文字列を取得する
    ///
    /// 200以外の応答は`BoardError::Status`。200でボディがJSONとして
    /// パースできない、または`version`フィールドがない場合は "N/A" を
    /// 返す（ピア自体はupとみなす）。
    async fn fetch_version(&self, base_url: &str) -> BoardResult<String> {
        let url = format!("{}/health", base_url.trim_end_matches('/'));
        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(BoardError::Status(response.status()));
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<PeerHealth>(&body) {
            Ok(health) => Ok(health
                .version
                .unwrap_or_else(|| VERSION_UNKNOWN.to_string())),
            Err(e) => {
                debug!(url = %url, error = %e, "Unparseable health response body");
                Ok(VERSION_UNKNOWN.to_string())
            }
        }
    }
}
