//! サンプルワークブックの書き出し

use crate::error::{Result, ScholarPageError};
use scholar_page_common::export::template::{build_workbook, sample_sheets, TemplateSheet};
use std::path::Path;

/// ひな形を書き出し、書いたシート定義を返す
pub fn write_template(output: &Path, force: bool) -> Result<Vec<TemplateSheet>> {
    if output.exists() && !force {
        return Err(ScholarPageError::OutputExists(output.display().to_string()));
    }

    let sheets = sample_sheets();
    let bytes = build_workbook(&sheets)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, bytes)?;
    Ok(sheets)
}

/// シートごとの行数と列を表示
pub fn print_summary(sheets: &[TemplateSheet]) {
    for sheet in sheets {
        println!("  {}: {}行", sheet.name, sheet.rows.len());
        println!("    列: {}", sheet.headers().join(", "));
    }
}
