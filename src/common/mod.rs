//! 共通レイヤー
//!
//! エラー型などモジュール横断で使う定義

pub mod error;

pub use error::{BoardError, BoardResult};
