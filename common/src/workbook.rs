//! ワークブック読み込み
//!
//! バイト列の解釈は calamine に任せ、ここでは各シートを行レコードに変換して
//! シート名で種別を振り分ける。

use crate::error::Result;
use crate::types::{RowRecord, Sheet, SheetKind};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use chrono::Timelike;
use std::io::Cursor;
use std::path::Path;

/// 1回の読み込み結果。種別判定できたシートのみをファイル内の順に保持する
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomepageContent {
    sheets: Vec<Sheet>,
}

impl HomepageContent {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// xlsx/xls/xlsb/ods のバイト列から読み込み
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
        let mut sheets = Vec::new();

        for name in workbook.sheet_names() {
            let Some(kind) = SheetKind::classify(&name) else {
                log::debug!("シート '{}' は対象外のためスキップ", name);
                continue;
            };
            let range = workbook.worksheet_range(&name)?;
            let rows = range_to_records(&range);
            log::debug!("シート '{}' → {} ({}行)", name, kind, rows.len());
            sheets.push(Sheet { name, kind, rows });
        }

        Ok(Self { sheets })
    }

    /// ファイルから読み込み
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// ファイル内の順に並んだシート
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// 指定種別の最後のシート（同種が複数あれば後勝ち）
    pub fn latest(&self, kind: SheetKind) -> Option<&Sheet> {
        self.sheets.iter().rev().find(|sheet| sheet.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// 先頭行をヘッダーとして各行をレコードにする。
/// 見出しが空の列と、全セルが空の行は読み飛ばす
pub fn range_to_records(range: &Range<Data>) -> Vec<RowRecord> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };

    let headers: Vec<Option<String>> = header_row
        .iter()
        .map(|cell| {
            cell_to_string(cell)
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
        })
        .collect();

    rows.filter_map(|row| {
        let record: RowRecord = headers
            .iter()
            .zip(row.iter())
            .filter_map(|(header, cell)| {
                let header = header.as_ref()?;
                cell_to_string(cell).map(|value| (header.clone(), value))
            })
            .collect();
        (!record.is_empty()).then_some(record)
    })
    .collect()
}

/// セル値を文字列化（空セル・エラーセルは None）
pub fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_number(*f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                return Some(format_number(dt.as_f64()));
            }
            match dt.as_datetime() {
                Some(datetime) if datetime.num_seconds_from_midnight() == 0 => {
                    Some(datetime.format("%Y-%m-%d").to_string())
                }
                Some(datetime) => Some(datetime.format("%Y-%m-%d %H:%M:%S").to_string()),
                None => Some(format_number(dt.as_f64())),
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

/// 整数値の浮動小数は小数点なしで表記（年が "2024.0" にならないように）
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
