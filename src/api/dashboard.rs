//! ダッシュボードAPIハンドラー
//!
//! ルートのHTMLダッシュボードと `/api/status` のJSON集約を提供する。
//! どちらも同じ `StatusReport` から組み立てる。

use crate::types::PeerStatus;
use crate::AppState;
use axum::{extract::State, response::Html, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// 自サービスと全ピアの状態の集約
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// 自サービス名
    pub service: String,
    /// 自サービスのバージョン
    pub version: String,
    /// レポート生成時刻
    pub generated_at: DateTime<Utc>,
    /// ピア名→プローブ結果
    pub peers: BTreeMap<String, PeerStatus>,
}

/// 現在の集約レポートを組み立てる
///
/// ピアのプローブはここで毎回実行される（結果のキャッシュはしない）。
async fn collect_report(state: &AppState) -> StatusReport {
    StatusReport {
        service: state.service_name.clone(),
        version: crate::version::read_version(&state.version_file),
        generated_at: Utc::now(),
        peers: state.checker.check_all(&state.registry).await,
    }
}

/// GET /
///
/// HTMLダッシュボードを返す。プローブが全滅してもエラーにはせず、
/// 常にベストエフォートの内容を描画する。
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let report = collect_report(&state).await;
    Html(render_dashboard(&report))
}

/// GET /api/status
///
/// ダッシュボードと同じ集約をJSONで返す。
pub async fn status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(collect_report(&state).await)
}

/// レポートをHTMLに描画する
fn render_dashboard(report: &StatusReport) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{} status</title></head>\n<body>\n",
        escape_html(&report.service)
    );
    let _ = write!(
        html,
        "<h1>Service: {}</h1>\n<p>Version: {}</p>\n",
        escape_html(&report.service),
        escape_html(&report.version)
    );

    html.push_str("<table border=\"1\">\n<tr><th>Peer</th><th>Status</th><th>Version</th><th>Latency</th></tr>\n");
    for (name, peer) in &report.peers {
        let latency = peer
            .latency_ms
            .map(|ms| format!("{} ms", ms))
            .unwrap_or_else(|| "-".to_string());
        let _ = write!(
            html,
            "<tr><td>{}</td><td class=\"{status}\">{status}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(name),
            escape_html(&peer.version),
            latency,
            status = peer.status.as_str(),
        );
    }
    html.push_str("</table>\n");

    let _ = write!(
        html,
        "<p><small>Generated at {}</small></p>\n</body>\n</html>\n",
        report.generated_at.to_rfc3339()
    );

    html
}

/// HTML特殊文字をエスケープする
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PeerState;

    fn sample_report() -> StatusReport {
        let mut peers = BTreeMap::new();
        peers.insert("blue".to_string(), PeerStatus::up("1.0".to_string(), 12));
        peers.insert("green".to_string(), PeerStatus::down());

        StatusReport {
            service: "peerboard".to_string(),
            version: "2.0".to_string(),
            generated_at: Utc::now(),
            peers,
        }
    }

    #[test]
    fn render_includes_service_and_peers() {
        let html = render_dashboard(&sample_report());

        assert!(html.contains("Service: peerboard"));
        assert!(html.contains("Version: 2.0"));
        assert!(html.contains("<td>blue</td>"));
        assert!(html.contains(">up</td>"));
        assert!(html.contains("<td>1.0</td>"));
        assert!(html.contains("<td>green</td>"));
        assert!(html.contains(">down</td>"));
        assert!(html.contains("<td>N/A</td>"));
        assert!(html.contains("12 ms"));
    }

    #[test]
    fn render_escapes_html() {
        let mut report = sample_report();
        report.version = "<script>".to_string();

        let html = render_dashboard(&report);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn escape_html_handles_all_specials() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn report_serializes_peer_map() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["service"], "peerboard");
        assert_eq!(json["peers"]["blue"]["status"], "up");
        assert_eq!(json["peers"]["green"]["version"], "N/A");
    }
}
