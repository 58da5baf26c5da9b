//! HTML断片の生成
//!
//! 各シートの行を並び替え、コンテナに差し込むマークアップを返す。
//! セルの文字列はシート作成者が書いたHTMLとしてそのまま出力する
//! （著者欄の `<strong>` など）。属性値のみエスケープする。

pub mod preprints;
pub mod publications;
pub mod talks;

pub use preprints::{render_preprint, render_preprints, sort_preprints};
pub use publications::{render_publication, render_publications, sort_publications};
pub use talks::{render_talk, render_talks, sort_talks};

use crate::config::HomepageConfig;
use crate::types::{columns, RowRecord, SheetKind};

/// 種別に応じたレンダラで断片を生成
pub fn render_sheet(kind: SheetKind, rows: &[RowRecord], config: &HomepageConfig) -> String {
    match kind {
        SheetKind::Publications => render_publications(rows, config),
        SheetKind::Preprints => render_preprints(rows, config),
        SheetKind::Talks => render_talks(rows, config),
    }
}

/// 先頭の整数部分を年として読む。数値でなければ 0
pub fn parse_year(text: &str) -> i64 {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

pub(crate) fn year_of(row: &RowRecord) -> i64 {
    parse_year(row.get(columns::YEAR))
}

/// 属性値用のエスケープ
pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// テキスト用のエスケープ
pub fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
