//! ピア登録管理
//!
//! `PEER_SERVICES` 環境変数からピア名→ベースURLのマッピングを構築する。
//! レジストリは起動時に一度だけ構築され、以後は読み取り専用。

use std::collections::BTreeMap;
use tracing::warn;

/// `PEER_SERVICES` 環境変数名
pub const PEER_SERVICES_ENV: &str = "PEER_SERVICES";

/// 環境変数未設定時のフォールバックピア
const DEFAULT_PEERS: [(&str, &str); 2] = [
    ("blue", "http://service-blue:5000"),
    ("green", "http://service-green:5001"),
];

/// ピアレジストリ
///
/// ピア名からベースURLへの不変マッピング。名前順で反復される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerRegistry {
    peers: BTreeMap<String, String>,
}

impl PeerRegistry {
    /// `PEER_SERVICES` 環境変数からレジストリを構築する
    ///
    /// 未設定または空文字列の場合は組み込みのデフォルトピアにフォールバック
    /// する。
    pub fn from_env() -> Self {
        match crate::config::get_env(PEER_SERVICES_ENV) {
            Some(raw) if !raw.is_empty() => Self::parse(&raw),
            _ => {
                warn!(
                    "{} environment variable not set, using default peers",
                    PEER_SERVICES_ENV
                );
                Self::defaults()
            }
        }
    }

    /// 設定文字列 `name1:url1,name2:url2,...` をパースする
    ///
    /// 各エントリは最初のコロンのみで分割するため、`http://host:port` の
    /// ようなコロンを含むURLも値として保持される。名前・URLとも前後の
    /// 空白は除去する。同名エントリは後勝ち。
    ///
    /// コロンを含まないエントリが1つでもあるとパース全体を破棄して空の
    /// レジストリを返す（all-or-nothing、エントリ単位の回復は行わない）。
    pub fn parse(raw: &str) -> Self {
        let mut peers = BTreeMap::new();

        for entry in raw.split(',') {
            let Some((name, url)) = entry.split_once(':') else {
                warn!(
                    "Malformed {} environment variable: '{}', using empty peer list",
                    PEER_SERVICES_ENV, raw
                );
                return Self::default();
            };
            peers.insert(name.trim().to_string(), url.trim().to_string());
        }

        Self { peers }
    }

    /// 組み込みのデフォルトピアでレジストリを構築する
    pub fn defaults() -> Self {
        let peers = DEFAULT_PEERS
            .iter()
            .map(|(name, url)| (name.to_string(), url.to_string()))
            .collect();
        Self { peers }
    }

    /// 明示的なエントリ一覧からレジストリを構築する（テスト用）
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            peers: entries.into_iter().collect(),
        }
    }

    /// ピア名→ベースURLの組を名前順で反復する
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.peers.iter()
    }

    /// 指定した名前のピアのベースURLを返す
    pub fn get(&self, name: &str) -> Option<&str> {
        self.peers.get(name).map(String::as_str)
    }

    /// 登録ピア数を返す
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    /// レジストリが空かどうかを返す
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}
