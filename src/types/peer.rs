//! ピア関連の型定義
//!
//! プローブ結果、ヘルスレスポンス等のコアデータ型

use serde::{Deserialize, Serialize};

/// バージョンが取得できなかった場合の表示値
pub const VERSION_UNKNOWN: &str = "N/A";

/// ピアの稼働状態
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PeerState {
    /// 稼働中（ヘルスチェック成功）
    Up,
    /// 停止中（到達不能・タイムアウト・非200応答）
    Down,
}

impl PeerState {
    /// 文字列表現を返す
    pub fn as_str(&self) -> &'static str {
        match self {
            PeerState::Up => "up",
            PeerState::Down => "down",
        }
    }
}

/// ピア1件のプローブ結果
///
/// リクエスト毎に作り直され、レスポンス送信後は保持されない。
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeerStatus {
    /// 稼働状態
    pub status: PeerState,
    /// ピアが報告したバージョン（取得不能時は "N/A"）
    pub version: String,
    /// プローブのレイテンシ（ミリ秒、成功時のみ）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u32>,
}

impl PeerStatus {
    /// 稼働中のピアの結果を作成
    pub fn up(version: String, latency_ms: u32) -> Self {
        Self {
            status: PeerState::Up,
            version,
            latency_ms: Some(latency_ms),
        }
    }

    /// 停止中のピアの結果を作成
    pub fn down() -> Self {
        Self {
            status: PeerState::Down,
            version: VERSION_UNKNOWN.to_string(),
            latency_ms: None,
        }
    }
}

/// 自サービスの `/health` レスポンスボディ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（自サービスが応答できている時点で常に up）
    pub status: PeerState,
    /// 自サービスのバージョン
    pub version: String,
}

/// ピアの `/health` レスポンスボディ
///
/// `version` 以外のフィールドは無視する。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeerHealth {
    /// ピアが報告するバージョン
    #[serde(default)]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peer_state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PeerState::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&PeerState::Down).unwrap(), "\"down\"");
    }

    #[test]
    fn down_status_has_no_latency() {
        let status = PeerStatus::down();
        assert_eq!(status.status, PeerState::Down);
        assert_eq!(status.version, VERSION_UNKNOWN);

        let json = serde_json::to_value(&status).unwrap();
        assert!(json.get("latency_ms").is_none());
        assert_eq!(json["status"], "down");
        assert_eq!(json["version"], "N/A");
    }

    #[test]
    fn up_status_serializes_latency() {
        let status = PeerStatus::up("1.2".to_string(), 42);
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "up");
        assert_eq!(json["version"], "1.2");
        assert_eq!(json["latency_ms"], 42);
    }

    #[test]
    fn peer_health_ignores_extra_fields() {
        let health: PeerHealth =
            serde_json::from_str(r#"{"status":"up","version":"2.1","extra":true}"#).unwrap();
        assert_eq!(health.version.as_deref(), Some("2.1"));
    }

    #[test]
    fn peer_health_version_defaults_to_none() {
        let health: PeerHealth = serde_json::from_str(r#"{"status":"up"}"#).unwrap();
        assert!(health.version.is_none());
    }
}
