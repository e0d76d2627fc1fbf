//! テスト用サポートモジュール

pub mod board;
pub mod http;
