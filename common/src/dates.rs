//! 日付文字列の解析（講演の並び替え用）
//!
//! 自由記述の日付を UTC のエポックミリ秒に変換する。曖昧な書式の正しさは保証せず、
//! 並び順を決めるためだけに使う。
//!
//! 1. 一般的な日付書式（ISO 8601、RFC 2822、`March 5, 2020`、`Jul. 2023` など）
//! 2. 19xx/20xx の年だけ拾えればその年の1月1日
//! 3. どれにも当たらなければ 0（降順で最後に並ぶ）

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;

lazy_static::lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"(?-u:\b)(?:19|20)\d{2}(?-u:\b)").unwrap();
}

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%m/%d/%Y"];

/// `%Y` は1〜3桁の年も受け付けるため、4桁未満の年は日付として扱わない
const MIN_YEAR: i32 = 1000;

/// 日付文字列をエポックミリ秒に変換（解釈できなければ 0）
pub fn parse_date(text: &str) -> i64 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    if let Some(millis) = parse_calendar_date(text) {
        return millis;
    }

    // 年だけ分かる場合（月名付きの書式は上で処理済み）
    extract_year(text)
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .and_then(start_of_day)
        .unwrap_or(0)
}

/// 書式として解釈できる日付のみ変換する
pub fn parse_calendar_date(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.timestamp_millis());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return (dt.year() >= MIN_YEAR).then(|| dt.and_utc().timestamp_millis());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return start_of_day(date);
        }
    }
    // "2020-03" は月初
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return start_of_day(date);
    }

    parse_month_name_date(text)
}

/// 文字列中の最初の 19xx/20xx
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

/// 月名を含む書式: `March 2020`, `Jul. 2023`, `May 5, 2022`, `5 May 2022`, `2022 May 5`
fn parse_month_name_date(text: &str) -> Option<i64> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
        .filter(|t| !t.is_empty())
        .collect();

    let (year, month, day) = match tokens.as_slice() {
        [first, second] => match (month_number(first), month_number(second)) {
            (Some(month), None) => (year_token(second)?, month, 1),
            (None, Some(month)) => (year_token(first)?, month, 1),
            _ => return None,
        },
        [first, second, third] => {
            if let Some(month) = month_number(first) {
                (year_token(third)?, month, day_token(second)?)
            } else if let Some(month) = month_number(second) {
                match year_token(first) {
                    Some(year) => (year, month, day_token(third)?),
                    None => (year_token(third)?, month, day_token(first)?),
                }
            } else {
                return None;
            }
        }
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day).and_then(start_of_day)
}

/// 英語の月名（3文字以上の略記可）→ 1..=12
fn month_number(token: &str) -> Option<u32> {
    let token = token.to_lowercase();
    if token.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&token))
        .map(|index| index as u32 + 1)
}

fn year_token(token: &str) -> Option<i32> {
    if token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

fn day_token(token: &str) -> Option<u32> {
    if token.is_empty() || token.len() > 2 || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok().filter(|day| (1..=31).contains(day))
}

fn start_of_day(date: NaiveDate) -> Option<i64> {
    if date.year() < MIN_YEAR {
        return None;
    }
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp_millis())
}
