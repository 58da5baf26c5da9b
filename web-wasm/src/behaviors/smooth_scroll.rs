//! ページ内リンクのスムーズスクロール

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// `a[href^="#"]` のクリックでリンク先までスムーズにスクロールする
pub fn install(document: &Document) {
    let Ok(anchors) = document.query_selector_all(r##"a[href^="#"]"##) else {
        return;
    };

    for index in 0..anchors.length() {
        let Some(anchor) = anchors.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let document = document.clone();
        let source = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let Some(href) = source.get_attribute("href") else {
                    return;
                };
                // "#" 単体など不正なセレクタは無視
                if let Ok(Some(target)) = document.query_selector(&href) {
                    scroll_into_view(&target);
                }
            },
        )
        .forget();
    }
}

fn scroll_into_view(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
