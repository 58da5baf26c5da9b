use crate::error::{Result, ScholarPageError};
use scholar_page_common::HomepageConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ページ側と共通の設定
    pub homepage: HomepageConfig,
    /// プレビューサーバーのポート
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage: HomepageConfig::default(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み（無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("設定を読み込み: {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScholarPageError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("scholar-page").join("config.json"))
    }

    pub fn set_highlighted_author(&mut self, name: String, path: &Path) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ScholarPageError::Config("著者名が空です".into()));
        }
        self.homepage.highlighted_author = name;
        self.save_to(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.homepage.workbook_path, "publications.xlsx");
    }

    #[test]
    fn test_set_highlight_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_highlighted_author("Ada Lovelace".into(), &path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.homepage.highlighted_author, "Ada Lovelace");
        assert_eq!(reloaded.port, DEFAULT_PORT);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"port": 9000}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.homepage.highlighted_author, "Mingxun Zhou");
    }

    #[test]
    fn test_blank_highlight_rejected() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        let result = config.set_highlighted_author("  ".into(), &dir.path().join("c.json"));
        assert!(matches!(result, Err(ScholarPageError::Config(_))));
    }
}
