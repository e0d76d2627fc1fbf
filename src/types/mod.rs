//! 型定義

pub mod peer;

pub use peer::{HealthResponse, PeerHealth, PeerState, PeerStatus, VERSION_UNKNOWN};
