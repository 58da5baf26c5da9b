//! 講演リスト

use super::escape_attr;
use crate::config::HomepageConfig;
use crate::dates::parse_date;
use crate::links::is_chinese_video_link;
use crate::types::{columns, RowRecord};

pub const VIDEO_LABEL: &str = "video";
pub const CHINESE_VIDEO_LABEL: &str = "video(中文视频)";

/// 日付の降順で安定ソート（解釈できない日付は最後）
pub fn sort_talks(rows: &[RowRecord]) -> Vec<&RowRecord> {
    let mut keyed: Vec<(i64, &RowRecord)> = rows
        .iter()
        .map(|row| (parse_date(row.get(columns::DATE)), row))
        .collect();
    keyed.sort_by_key(|(millis, _)| std::cmp::Reverse(*millis));
    keyed.into_iter().map(|(_, row)| row).collect()
}

pub fn render_talks(rows: &[RowRecord], config: &HomepageConfig) -> String {
    sort_talks(rows)
        .into_iter()
        .map(|row| format!("<li>{}</li>\n", render_talk(row, &config.chinese_video_hosts)))
        .collect()
}

/// "タイトル" at 会場 日付 [動画リンク]
pub fn render_talk(row: &RowRecord, chinese_video_hosts: &[String]) -> String {
    let mut parts: Vec<String> = Vec::new();

    let title = row.get(columns::TITLE);
    if !title.is_empty() {
        parts.push(format!("\"{}\"", title));
    }

    let venue = row.get(columns::VENUE);
    if !venue.is_empty() {
        parts.push(format!("at {}", venue));
    }

    let date = row.get(columns::DATE);
    if !date.is_empty() {
        parts.push(date.to_string());
    }

    let video_link = row.get(columns::VIDEO_LINK);
    if !video_link.trim().is_empty() {
        let label = if is_chinese_video_link(video_link, chinese_video_hosts) {
            CHINESE_VIDEO_LABEL
        } else {
            VIDEO_LABEL
        };
        parts.push(format!(r#"[<a href="{}">{}</a>]"#, escape_attr(video_link), label));
    }

    parts.join(" ")
}
