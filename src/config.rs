//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with
//! defaults, plus the server bind configuration.

use std::path::PathBuf;

/// Get an environment variable
///
/// Returns `None` when the variable is unset. An empty value is returned
/// as-is; callers that treat empty as unset must check themselves.
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default when the variable is unset or fails to parse.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    get_env(name).and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// サーバーのバインド設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    pub host: String,
    /// ポート番号 (デフォルト: 5000)
    pub port: u16,
}

impl ServerConfig {
    /// 環境変数からバインド設定を読み込む
    pub fn from_env() -> Self {
        let host = get_env_or("PEERBOARD_HOST", "0.0.0.0");
        let port = get_env_parse("PEERBOARD_PORT", 5000);
        Self { host, port }
    }

    /// `host:port` 形式のバインドアドレスを返す
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// バージョンファイルのパスを取得
///
/// 環境変数 `PEERBOARD_VERSION_FILE` から取得し、未設定の場合は
/// カレントディレクトリの `version.txt` を使用する。
pub fn version_file_path() -> PathBuf {
    PathBuf::from(get_env_or("PEERBOARD_VERSION_FILE", "version.txt"))
}

/// ダッシュボードに表示する自サービス名を取得
pub fn service_name() -> String {
    get_env_or("PEERBOARD_SERVICE_NAME", "peerboard")
}
