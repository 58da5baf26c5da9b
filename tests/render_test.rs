//! ひな形生成からHTML出力までの統合テスト

use scholar_page::error::ScholarPageError;
use scholar_page::{render, template};
use scholar_page_common::HomepageConfig;
use tempfile::tempdir;

fn position(html: &str, needle: &str) -> usize {
    html.find(needle).unwrap_or_else(|| panic!("{} が見つからない", needle))
}

#[test]
fn test_template_then_render() {
    let dir = tempdir().expect("Failed to create temp dir");
    let workbook = dir.path().join("publications.xlsx");
    let output = dir.path().join("rendered");

    template::write_template(&workbook, false).expect("ひな形生成失敗");
    let written = render::render_workbook(&workbook, &output, &HomepageConfig::default())
        .expect("HTML生成失敗");

    assert_eq!(
        written,
        vec![
            output.join("publications.html"),
            output.join("preprints.html"),
            output.join("talks.html"),
        ]
    );

    // 出版物: 年の降順、同年は会場の昇順
    let publications = std::fs::read_to_string(output.join("publications.html")).unwrap();
    assert_eq!(publications.matches(r#"<div class="publication-item">"#).count(), 5);
    assert!(position(&publications, "Pacmann") < position(&publications, "Efficient Pre-processing PIR"));
    assert!(position(&publications, "Efficient Pre-processing PIR") < position(&publications, "Piano"));
    assert!(position(&publications, "Piano") < position(&publications, "SquirRL"));
    assert!(publications.contains("<strong>Mingxun Zhou</strong>*"));

    let preprints = std::fs::read_to_string(output.join("preprints.html")).unwrap();
    assert!(preprints.starts_with(r#"<li><a href="https://csd.cmu.edu"#));
    assert!(preprints.contains("VRecon: An Efficient Set Reconciliation Algorithm, <strong>Bachelor Thesis</strong>, 2021."));

    // 講演: 日付の降順、bilibili は中国語ラベル
    let talks = std::fs::read_to_string(output.join("talks.html")).unwrap();
    let lines: Vec<&str> = talks.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Jan. 2024"));
    assert!(lines[1].contains("Jul. 2023") && lines[1].contains("video(中文视频)"));
    assert!(lines[2].contains("May 2023"));
    assert!(lines[3].contains("Aug. 2020"));
}

#[test]
fn test_render_with_other_author() {
    let dir = tempdir().expect("Failed to create temp dir");
    let workbook = dir.path().join("publications.xlsx");
    template::write_template(&workbook, false).unwrap();

    let config = HomepageConfig {
        highlighted_author: "Elaine Shi".into(),
        ..HomepageConfig::default()
    };
    render::render_workbook(&workbook, dir.path(), &config).unwrap();

    let publications = std::fs::read_to_string(dir.path().join("publications.html")).unwrap();
    assert!(publications.contains("<strong>Elaine Shi</strong>"));
    assert!(!publications.contains("<strong>Mingxun Zhou</strong>"));
}

#[test]
fn test_render_corrupt_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let workbook = dir.path().join("publications.xlsx");
    std::fs::write(&workbook, b"not a workbook").unwrap();

    let result = render::render_workbook(&workbook, dir.path(), &HomepageConfig::default());
    assert!(matches!(result, Err(ScholarPageError::Content(_))));
}
