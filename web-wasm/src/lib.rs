//! Scholar Page Web App (Leptos + WASM)
//!
//! ページの静的マークアップにあるセクションへ、ワークブックの内容を差し込む。

mod behaviors;
mod components;
pub mod config;
pub mod dom;
pub mod loader;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    dom::on_ready(init);
}

fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    let config = config::load_page_config(&document);

    behaviors::smooth_scroll::install(&document);
    behaviors::email_copy::install(&document, &config.toast);
    components::scroll_to_top::mount(config.scroll_top_threshold);

    wasm_bindgen_futures::spawn_local(loader::load_all_content(config));
}
