//! 出版物リスト
//!
//! 年の降順、同年内は会議名の昇順（会議名なしは空文字扱いで先頭）。

use super::{escape_attr, year_of};
use crate::config::HomepageConfig;
use crate::highlight::highlight_author;
use crate::types::{columns, RowRecord};

/// 年の降順 → 会議名の昇順で安定ソート
pub fn sort_publications(rows: &[RowRecord]) -> Vec<&RowRecord> {
    let mut sorted: Vec<&RowRecord> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        year_of(b)
            .cmp(&year_of(a))
            .then_with(|| a.get(columns::VENUE).cmp(b.get(columns::VENUE)))
    });
    sorted
}

/// 並び替えた全出版物のブロックを連結
pub fn render_publications(rows: &[RowRecord], config: &HomepageConfig) -> String {
    sort_publications(rows)
        .into_iter()
        .map(|row| render_publication(row, &config.highlighted_author))
        .collect()
}

/// 1件分の `publication-item` ブロック
pub fn render_publication(row: &RowRecord, highlighted_author: &str) -> String {
    let year = row.get(columns::YEAR);
    let venue = row.get(columns::VENUE);
    let title = row.get(columns::TITLE);
    let link = row.get(columns::LINK);
    let note = row.get(columns::NOTE);
    let code_link = row.get(columns::CODE_LINK);

    let mut header = String::new();
    if !year.is_empty() {
        header.push_str(&format!(r#"<span class="pub-year">{}</span>"#, year));
    }
    if !venue.is_empty() {
        header.push_str(&format!(r#"<span class="pub-venue">{}</span>"#, venue));
    }

    let href = if link.is_empty() { "#" } else { link };
    let inert = if href == "#" { r#" onclick="return false;""# } else { "" };

    let mut authors = highlight_author(row.get(columns::AUTHORS), highlighted_author);
    if !note.is_empty() {
        authors.push_str(&format!(r#" <span class="pub-note">{}</span>"#, note));
    }
    if !code_link.is_empty() {
        authors.push_str(&format!(
            r#" <span class="pub-links">[<a href="{}">code</a>]</span>"#,
            escape_attr(code_link)
        ));
    }

    format!(
        concat!(
            r#"<div class="publication-item">"#,
            r#"<div class="publication-header">{header}</div>"#,
            r#"<h3 class="pub-title"><a href="{href}"{inert}>{title}</a></h3>"#,
            r#"<div class="pub-authors">{authors}</div>"#,
            "</div>\n",
        ),
        header = header,
        href = escape_attr(href),
        inert = inert,
        title = title,
        authors = authors,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication(year: &str, venue: &str, title: &str) -> RowRecord {
        let mut row = RowRecord::new().with(columns::TITLE, title);
        if !year.is_empty() {
            row.insert(columns::YEAR, year);
        }
        if !venue.is_empty() {
            row.insert(columns::VENUE, venue);
        }
        row
    }

    fn titles(rows: &[&RowRecord]) -> Vec<String> {
        rows.iter().map(|r| r.get(columns::TITLE).to_string()).collect()
    }

    #[test]
    fn test_sort_year_desc_then_venue_asc() {
        let rows = vec![
            publication("2023", "INFOCOM", "a"),
            publication("2024", "S&P", "b"),
            publication("2024", "CCS", "c"),
            publication("2025", "ICLR", "d"),
            publication("2024", "Eurocrypt", "e"),
        ];
        let sorted = sort_publications(&rows);
        assert_eq!(titles(&sorted), vec!["d", "c", "e", "b", "a"]);
    }

    #[test]
    fn test_sort_missing_year_last_missing_venue_first() {
        let rows = vec![
            publication("", "VLDB", "no-year"),
            publication("2022", "S&P", "venue"),
            publication("2022", "", "no-venue"),
            publication("soon", "NDSS", "bad-year"),
        ];
        let sorted = sort_publications(&rows);
        assert_eq!(titles(&sorted), vec!["no-venue", "venue", "bad-year", "no-year"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let rows = vec![
            publication("2023", "Eurocrypt", "first"),
            publication("2023", "Eurocrypt", "second"),
        ];
        assert_eq!(titles(&sort_publications(&rows)), vec!["first", "second"]);
    }

    #[test]
    fn test_render_full_publication() {
        let row = publication("2021", "NDSS", "SquirRL")
            .with(columns::LINK, "https://arxiv.org/pdf/1912.01798.pdf")
            .with(columns::AUTHORS, "Charlie Hou*, Mingxun Zhou*, Yan Ji")
            .with(columns::NOTE, "(*Equal Contribution)")
            .with(columns::CODE_LINK, "https://github.com/wuwuz/SquirRL");

        let html = render_publication(&row, "Mingxun Zhou");
        assert!(html.starts_with(r#"<div class="publication-item">"#));
        assert!(html.contains(r#"<span class="pub-year">2021</span><span class="pub-venue">NDSS</span>"#));
        assert!(html.contains(r#"<a href="https://arxiv.org/pdf/1912.01798.pdf">SquirRL</a>"#));
        assert!(html.contains(concat!(
            r#"<div class="pub-authors">Charlie Hou*, <strong>Mingxun Zhou</strong>*, Yan Ji"#,
            r#" <span class="pub-note">(*Equal Contribution)</span>"#,
            r#" <span class="pub-links">[<a href="https://github.com/wuwuz/SquirRL">code</a>]</span></div>"#,
        )));
    }

    #[test]
    fn test_render_without_link_is_inert() {
        let row = publication("2020", "VLDB", "Vacuum Filters");
        let html = render_publication(&row, "Mingxun Zhou");
        assert!(html.contains(r##"<a href="#" onclick="return false;">Vacuum Filters</a>"##));
        assert!(!html.contains("pub-note"));
        assert!(!html.contains("pub-links"));
    }

    #[test]
    fn test_render_omits_empty_header_parts() {
        let row = publication("", "", "Untitled");
        let html = render_publication(&row, "Mingxun Zhou");
        assert!(html.contains(r#"<div class="publication-header"></div>"#));
    }

    #[test]
    fn test_render_already_highlighted_authors() {
        let row = publication("2024", "CCS", "Conan")
            .with(columns::AUTHORS, "<strong>Mingxun Zhou</strong>, Elaine Shi");
        let html = render_publication(&row, "Mingxun Zhou");
        assert_eq!(html.matches("<strong>Mingxun Zhou</strong>").count(), 1);
    }

    #[test]
    fn test_render_publications_order() {
        let rows = vec![publication("2020", "VLDB", "old"), publication("2025", "ICLR", "new")];
        let html = render_publications(&rows, &HomepageConfig::default());
        assert!(html.find(">new<").unwrap() < html.find(">old<").unwrap());
        assert_eq!(html.matches("publication-item").count(), 2);
    }

    mod properties {
        use super::*;
        use crate::render::parse_year;
        use proptest::prelude::*;

        fn year_text() -> impl Strategy<Value = String> {
            prop_oneof![
                "(19|20)[0-9]{2}",
                "[a-z ]{0,4}",
                "[0-9]{4}[a-z]{0,2}",
            ]
        }

        proptest! {
            #[test]
            fn sorted_by_year_desc_then_venue_asc(
                entries in prop::collection::vec((year_text(), "[A-Za-z&]{0,5}"), 0..12)
            ) {
                let rows: Vec<RowRecord> = entries
                    .iter()
                    .map(|(year, venue)| publication(year, venue, "t"))
                    .collect();
                let sorted = sort_publications(&rows);
                prop_assert_eq!(sorted.len(), rows.len());

                for pair in sorted.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    let (year_a, year_b) = (parse_year(a.get(columns::YEAR)), parse_year(b.get(columns::YEAR)));
                    prop_assert!(year_a >= year_b);
                    if year_a == year_b {
                        prop_assert!(a.get(columns::VENUE) <= b.get(columns::VENUE));
                    }
                }
            }
        }
    }
}
