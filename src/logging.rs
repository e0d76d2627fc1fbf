//! ロギング初期化ユーティリティ

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// グローバルのtracingサブスクライバーを初期化する
///
/// フィルタは `PEERBOARD_LOG_LEVEL`、`RUST_LOG` の順で参照し、
/// どちらも未設定なら `info` を使用する。
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_env("PEERBOARD_LOG_LEVEL")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()
}
