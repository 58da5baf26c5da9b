//! 行レコード・シートの型定義
//!
//! - RowRecord: スプレッドシート1行（列名→文字列）
//! - SheetKind: シート名から判定する内容種別
//! - Sheet: 種別付きの行の並び

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 既知の列名
pub mod columns {
    pub const YEAR: &str = "Year";
    pub const VENUE: &str = "Venue";
    pub const TITLE: &str = "Title";
    pub const LINK: &str = "Link";
    pub const AUTHORS: &str = "Authors";
    pub const NOTE: &str = "Note";
    pub const CODE_LINK: &str = "CodeLink";
    pub const TYPE: &str = "Type";
    pub const DATE: &str = "Date";
    pub const VIDEO_LINK: &str = "VideoLink";
}

/// スプレッドシート1行分。スキーマは強制せず、無い列は空文字として読む
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowRecord {
    fields: BTreeMap<String, String>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 列を追加して自身を返す
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// 列の値（無ければ空文字）
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K, V> FromIterator<(K, V)> for RowRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

/// シート種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKind {
    Publications,
    Preprints,
    Talks,
}

impl SheetKind {
    pub const ALL: [SheetKind; 3] = [SheetKind::Publications, SheetKind::Preprints, SheetKind::Talks];

    /// シート名（大文字小文字無視）から種別を判定。該当なしはNone
    pub fn classify(sheet_name: &str) -> Option<Self> {
        match sheet_name.to_lowercase().as_str() {
            "publications" | "sheet1" => Some(SheetKind::Publications),
            "preprints" => Some(SheetKind::Preprints),
            "talks" | "presentations" => Some(SheetKind::Talks),
            _ => None,
        }
    }

    /// DOM id の接頭辞
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetKind::Publications => "publications",
            SheetKind::Preprints => "preprints",
            SheetKind::Talks => "talks",
        }
    }

    pub fn loading_id(&self) -> String {
        format!("{}-loading", self.as_str())
    }

    pub fn container_id(&self) -> String {
        format!("{}-container", self.as_str())
    }

    pub fn error_id(&self) -> String {
        format!("{}-error", self.as_str())
    }
}

impl std::fmt::Display for SheetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 種別判定済みのシート
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub kind: SheetKind,
    pub rows: Vec<RowRecord>,
}
