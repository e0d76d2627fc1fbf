//! 自サービスのバージョン参照
//!
//! バージョンファイルをリクエスト毎に読み直す（キャッシュしない）。

use crate::types::VERSION_UNKNOWN;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// バージョンファイルを読み、前後の空白を除去した内容を返す
///
/// ファイルが存在しない場合は "N/A"。その他のI/Oエラー（権限等）も
/// "N/A" に落とすが、想定外のため警告を出す。
pub fn read_version(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.trim().to_string(),
        Err(e) if e.kind() == ErrorKind::NotFound => VERSION_UNKNOWN.to_string(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read version file");
            VERSION_UNKNOWN.to_string()
        }
    }
}
