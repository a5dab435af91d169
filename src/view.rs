//! Plain-text rendering for the terminal front end.

use chrono::{DateTime, FixedOffset};

use crate::history::HistoryEntry;

pub const TITLE: &str = "夸奖孩子";
pub const LOADING: &str = "正在生成夸奖话语...";
pub const RESULTS_HEADING: &str = "温暖的夸奖话语";
pub const HISTORY_HEADING: &str = "最近的夸奖记录";
pub const FAILURE: &str = "生成失败，请重试";

pub fn render_replies(replies: &[String]) -> String {
    let mut out = format!("{RESULTS_HEADING}\n");
    for (index, reply) in replies.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, reply));
    }
    out
}

/// Renders history most-recent-first. Empty history renders as nothing.
pub fn render_history(entries: &[HistoryEntry], offset: &FixedOffset) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut out = format!("{HISTORY_HEADING}\n");
    for entry in entries {
        out.push_str(&format!("  [{}]\n", format_timestamp(entry.timestamp, offset)));
        for reply in &entry.replies {
            out.push_str(&format!("    | {}\n", reply));
        }
    }
    out
}

pub fn format_timestamp(timestamp_ms: i64, offset: &FixedOffset) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc
            .with_timezone(offset)
            .format("%Y/%m/%d %H:%M:%S")
            .to_string(),
        None => timestamp_ms.to_string(),
    }
}
