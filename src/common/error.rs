//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// peerboard error type
#[derive(Debug, Error)]
pub enum BoardError {
    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected HTTP status from a peer
    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// peerboard result type
pub type BoardResult<T> = Result<T, BoardError>;
