//! ワークブックから静的HTML断片を書き出す

use crate::error::{Result, ScholarPageError};
use scholar_page_common::{render_sheet, HomepageConfig, HomepageContent, SheetKind};
use std::path::{Path, PathBuf};

/// 各セクションを `{output_dir}/{section}.html` に書き出し、書いたパスを返す
pub fn render_workbook(input: &Path, output_dir: &Path, config: &HomepageConfig) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(ScholarPageError::FileNotFound(input.display().to_string()));
    }

    let content = HomepageContent::from_path(input)?;
    render_content(&content, output_dir, config)
}

pub fn render_content(content: &HomepageContent, output_dir: &Path, config: &HomepageConfig) -> Result<Vec<PathBuf>> {
    if content.is_empty() {
        log::warn!("Publications / Preprints / Talks に該当するシートがありません");
    }
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    for kind in SheetKind::ALL {
        let Some(sheet) = content.latest(kind) else {
            log::info!("{} シートがないためスキップ", kind);
            continue;
        };
        if sheet.rows.is_empty() {
            log::info!("{} シートが空のためスキップ", sheet.name);
            continue;
        }

        let html = render_sheet(kind, &sheet.rows, config);
        let path = output_dir.join(format!("{}.html", kind.as_str()));
        std::fs::write(&path, html)?;
        log::debug!("{} 件 -> {}", sheet.rows.len(), path.display());
        written.push(path);
    }

    Ok(written)
}
