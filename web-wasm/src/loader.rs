//! ワークブックの取得と各セクションへの反映
//!
//! 取得は1回のみ。失敗したら再試行せず全セクションをエラー表示にする。

use crate::dom;
use js_sys::Uint8Array;
use scholar_page_common::{
    content_views, failure_views, Error, HomepageConfig, HomepageContent, Result,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// 取得 → 解析 → 各セクションに反映
pub async fn load_all_content(config: HomepageConfig) {
    let Some(document) = dom::document() else {
        return;
    };

    match fetch_content(&config).await {
        Ok(content) => {
            dom::apply_section_views(&document, &content_views(&content, &config));
        }
        Err(err) => {
            let stage = if err.is_fetch() { "loading" } else { "parsing" };
            gloo::console::error!(format!("Error {} Excel file: {}", stage, err));
            let views = failure_views(&err, dom::is_local_file(), &config);
            dom::apply_section_views(&document, &views);
        }
    }
}

/// キャッシュ回避クエリ付きでワークブックを取得して解析
pub async fn fetch_content(config: &HomepageConfig) -> Result<HomepageContent> {
    let url = config.workbook_url(js_sys::Date::now() as u64);
    let bytes = fetch_bytes(&url).await?;
    HomepageContent::from_bytes(&bytes)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let window = web_sys::window()
        .ok_or_else(|| Error::Network("window is not available".into()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network_error)?
        .dyn_into()
        .map_err(network_error)?;

    if !response.ok() {
        return Err(Error::Fetch { status: response.status() });
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

fn network_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Network(message)
}
