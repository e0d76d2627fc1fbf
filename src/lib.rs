//! Peerboard
//!
//! 自サービスとピアサービスの稼働状況・バージョンを集約して表示するサービス

#![warn(missing_docs)]

/// 共通型定義・エラー型
pub mod common;

/// REST APIハンドラー
pub mod api;

/// ヘルスチェック（ピアプローブ）
pub mod health;

/// ピア登録管理
pub mod registry;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// 型定義
pub mod types;

/// 自サービスのバージョン参照
pub mod version;

/// サーバー初期化ロジック
pub mod bootstrap;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// ピアレジストリ（起動時に一度だけ構築、以後読み取り専用）
    pub registry: registry::PeerRegistry,
    /// ピアヘルスチェッカー（共有HTTPクライアントを保持）
    pub checker: health::PeerChecker,
    /// バージョンファイルのパス（リクエスト毎に読み直す）
    pub version_file: std::path::PathBuf,
    /// ダッシュボードに表示する自サービス名
    pub service_name: String,
}
