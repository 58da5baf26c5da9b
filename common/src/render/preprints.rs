//! プレプリント・学位論文リスト

use super::{escape_attr, year_of};
use crate::config::HomepageConfig;
use crate::highlight::highlight_author_if_unmarked;
use crate::types::{columns, RowRecord};

/// 年の降順で安定ソート
pub fn sort_preprints(rows: &[RowRecord]) -> Vec<&RowRecord> {
    let mut sorted: Vec<&RowRecord> = rows.iter().collect();
    sorted.sort_by_key(|row| std::cmp::Reverse(year_of(row)));
    sorted
}

pub fn render_preprints(rows: &[RowRecord], config: &HomepageConfig) -> String {
    sort_preprints(rows)
        .into_iter()
        .map(|row| format!("<li>{}</li>\n", render_preprint(row, &config.highlighted_author)))
        .collect()
}

/// タイトル, 著者, <strong>注記</strong>, 年. の形式（空の要素は省く）
pub fn render_preprint(row: &RowRecord, highlighted_author: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    let title = row.get(columns::TITLE);
    let link = row.get(columns::LINK);
    if !title.is_empty() {
        if link.trim().is_empty() {
            parts.push(title.to_string());
        } else {
            parts.push(format!(r#"<a href="{}">{}</a>"#, escape_attr(link), title));
        }
    }

    let authors = row.get(columns::AUTHORS);
    if !authors.is_empty() {
        parts.push(highlight_author_if_unmarked(authors, highlighted_author));
    }

    // 注記がなければ種別で代用
    let note = match row.get(columns::NOTE) {
        "" => row.get(columns::TYPE),
        note => note,
    };
    if !note.is_empty() {
        parts.push(format!("<strong>{}</strong>", note));
    }

    let year = row.get(columns::YEAR);
    if !year.is_empty() {
        parts.push(year.to_string());
    }

    format!("{}.", parts.join(", "))
}
