//! ヘルスチェック
//!
//! リクエスト毎にレジストリ上の全ピアをプローブし、稼働状況と
//! バージョンを集約する。

pub mod peer_checker;

pub use peer_checker::PeerChecker;
