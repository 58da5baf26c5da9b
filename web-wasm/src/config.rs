//! ページ埋め込み設定の読み込み

use scholar_page_common::HomepageConfig;
use web_sys::Document;

/// `<script type="application/json" id="homepage-config">` の id
pub const CONFIG_ELEMENT_ID: &str = "homepage-config";

/// 埋め込み設定があれば読み込み、無い・壊れている場合は既定値
pub fn load_page_config(document: &Document) -> HomepageConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return HomepageConfig::default();
    };
    let json = element.text_content().unwrap_or_default();
    match HomepageConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!(format!("#{} を読み込めません: {}", CONFIG_ELEMENT_ID, err));
            HomepageConfig::default()
        }
    }
}
