//! セクション表示状態
//!
//! 各セクション（出版物/プレプリント/講演）は読み込み中・本体・エラーの3要素を持つ。
//! どれを表示し何を差し込むかをここで決め、DOMへの反映は呼び出し側が行う。

use crate::config::HomepageConfig;
use crate::error::Error;
use crate::render::{escape_text, render_sheet};
use crate::types::{RowRecord, SheetKind};
use crate::workbook::HomepageContent;

/// 出版物シートが空のときのメッセージ
pub const EMPTY_PUBLICATIONS_HTML: &str = "<p>No publications found in the Excel file.</p>";

/// セクションの表示状態
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView {
    /// 初期状態（読み込み中表示のみ）
    Loading,
    /// 本体に差し込むHTML
    Populated(String),
    /// 空シートの案内（エラー欄に表示）
    EmptyNotice(String),
    /// 空シートで何も表示しない
    Hidden,
    /// 読み込み失敗（エラー欄に表示）
    Failed(String),
}

impl SectionView {
    /// シートの行からセクション状態を決める
    pub fn for_sheet(kind: SheetKind, rows: &[RowRecord], config: &HomepageConfig) -> Self {
        if rows.is_empty() {
            return match kind {
                SheetKind::Publications => SectionView::EmptyNotice(EMPTY_PUBLICATIONS_HTML.into()),
                SheetKind::Preprints | SheetKind::Talks => SectionView::Hidden,
            };
        }
        SectionView::Populated(render_sheet(kind, rows, config))
    }

    pub fn loading_visible(&self) -> bool {
        matches!(self, SectionView::Loading)
    }

    pub fn container_visible(&self) -> bool {
        matches!(self, SectionView::Populated(_))
    }

    pub fn error_visible(&self) -> bool {
        matches!(self, SectionView::EmptyNotice(_) | SectionView::Failed(_))
    }

    pub fn container_html(&self) -> Option<&str> {
        match self {
            SectionView::Populated(html) => Some(html),
            _ => None,
        }
    }

    pub fn error_html(&self) -> Option<&str> {
        match self {
            SectionView::EmptyNotice(html) | SectionView::Failed(html) => Some(html),
            _ => None,
        }
    }
}

/// 読み込み結果のシートごとの表示状態（ファイル内の順）
pub fn content_views(content: &HomepageContent, config: &HomepageConfig) -> Vec<(SheetKind, SectionView)> {
    content
        .sheets()
        .iter()
        .map(|sheet| (sheet.kind, SectionView::for_sheet(sheet.kind, &sheet.rows, config)))
        .collect()
}

/// 読み込み失敗時は全セクションを同じエラー表示にする
pub fn failure_views(error: &Error, local_file: bool, config: &HomepageConfig) -> Vec<(SheetKind, SectionView)> {
    let message = failure_message(error, local_file, &config.workbook_path);
    SheetKind::ALL
        .iter()
        .map(|kind| (*kind, SectionView::Failed(message.clone())))
        .collect()
}

/// エラー欄に出すHTML。`file:` で開かれている場合はローカルサーバーの案内を出す
pub fn failure_message(error: &Error, local_file: bool, workbook_path: &str) -> String {
    if local_file {
        return concat!(
            "<p><strong>CORS Error:</strong> Browsers block loading local files for security reasons.</p>",
            "<p><strong>Solution:</strong> Use a local web server:</p>",
            r#"<ol style="text-align: left; margin: 1rem 2rem;">"#,
            "<li>Run: <code>scholar-page serve</code></li>",
            "<li>Open: <code>http://localhost:8000</code> in your browser</li>",
            "</ol>",
            "<p><small>Or use any HTTP server: <code>python3 -m http.server</code> or <code>npx serve</code></small></p>",
        )
        .to_string();
    }
    format!(
        "<p>Failed to load content. Please ensure <code>{}</code> exists in your repository.</p><p><small>Error: {}</small></p>",
        escape_text(workbook_path),
        escape_text(&error.to_string()),
    )
}
