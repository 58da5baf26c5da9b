//! ホームページ設定
//!
//! ブラウザ側では `<script id="homepage-config">` のJSON、
//! CLI側では設定ファイルから読み込む。未指定の項目は既定値になる。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 強調表示する著者名の既定値
pub const DEFAULT_HIGHLIGHTED_AUTHOR: &str = "Mingxun Zhou";

/// ワークブックの既定パス（ページからの相対）
pub const DEFAULT_WORKBOOK_PATH: &str = "publications.xlsx";

/// トースト通知の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToastSettings {
    pub message: String,
    /// 追加から `show` クラス付与までの遅延
    pub show_delay_ms: u32,
    /// 表示時間
    pub visible_ms: u32,
    /// フェードアウト後に要素を取り除くまでの時間
    pub fade_ms: u32,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            message: "Email copied to clipboard!".into(),
            show_delay_ms: 10,
            visible_ms: 2000,
            fade_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomepageConfig {
    /// 著者欄で `<strong>` 強調する名前
    pub highlighted_author: String,
    pub workbook_path: String,
    /// ホスト名にこのいずれかを含む動画リンクは「中文视频」表記にする
    pub chinese_video_hosts: Vec<String>,
    /// スクロール量がこれを超えたらトップへ戻るボタンを表示（px）
    pub scroll_top_threshold: f64,
    pub toast: ToastSettings,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            highlighted_author: DEFAULT_HIGHLIGHTED_AUTHOR.into(),
            workbook_path: DEFAULT_WORKBOOK_PATH.into(),
            chinese_video_hosts: vec!["bilibili".into(), "b23.tv".into()],
            scroll_top_threshold: 300.0,
            toast: ToastSettings::default(),
        }
    }
}

impl HomepageConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// キャッシュ回避用のクエリを付けたワークブックURL
    pub fn workbook_url(&self, now_ms: u64) -> String {
        let separator = if self.workbook_path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.workbook_path, separator, now_ms)
    }
}
