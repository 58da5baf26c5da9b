//! メールアドレスのコピー
//!
//! 通常クリックはメールクライアントを開く。Ctrl/Cmd+クリックでアドレスをコピーする。

use super::toast::show_notification;
use gloo::events::{EventListener, EventListenerOptions};
use scholar_page_common::links::mailto_address;
use scholar_page_common::ToastSettings;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlDocument, HtmlTextAreaElement, MouseEvent};

pub const TITLE_HINT: &str = "Click: Open email | Ctrl/Cmd+Click: Copy email";

pub fn install(document: &Document, toast: &ToastSettings) {
    let Ok(links) = document.query_selector_all(r#"a[href^="mailto:"]"#) else {
        return;
    };

    for index in 0..links.length() {
        let Some(link) = links.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let _ = link.set_attribute("title", TITLE_HINT);

        let source = link.clone();
        let toast = toast.clone();
        EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if !(mouse.ctrl_key() || mouse.meta_key()) {
                    return;
                }
                event.prevent_default();
                let href = source.get_attribute("href").unwrap_or_default();
                copy_email(mailto_address(&href).to_string(), toast.clone());
            },
        )
        .forget();
    }
}

fn copy_email(email: String, toast: ToastSettings) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    if has_clipboard_api(&navigator) {
        let promise = navigator.clipboard().write_text(&email);
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => show_notification(&toast),
                Err(err) => gloo::console::warn!("clipboard write failed", err),
            }
        });
        return;
    }

    match copy_with_selection(&email) {
        Ok(()) => show_notification(&toast),
        Err(err) => gloo::console::warn!("copy fallback failed", err),
    }
}

/// `navigator.clipboard.writeText` が関数として存在するか
fn has_clipboard_api(navigator: &JsValue) -> bool {
    let Ok(clipboard) = js_sys::Reflect::get(navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map(|write_text| write_text.is_function())
        .unwrap_or(false)
}

/// Clipboard API が無いブラウザ向け: 一時的な textarea を選択してコピー
fn copy_with_selection(text: &str) -> Result<(), JsValue> {
    let document = crate::dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(text);
    body.append_child(&textarea)?;
    textarea.select();

    let copied = match document.dyn_ref::<HtmlDocument>() {
        Some(html_document) => html_document.exec_command("copy"),
        None => Ok(false),
    };
    body.remove_child(&textarea)?;

    copied?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn navigator_with(clipboard: &JsValue) -> JsValue {
        let navigator = Object::new();
        Reflect::set(&navigator, &JsValue::from_str("clipboard"), clipboard).unwrap();
        navigator.into()
    }

    #[wasm_bindgen_test]
    fn test_clipboard_without_write_text_uses_fallback() {
        assert!(!has_clipboard_api(&navigator_with(&Object::new().into())));
        assert!(!has_clipboard_api(&navigator_with(&JsValue::NULL)));
        assert!(!has_clipboard_api(&Object::new().into()));
    }

    #[wasm_bindgen_test]
    fn test_clipboard_with_write_text() {
        let clipboard = Object::new();
        Reflect::set(&clipboard, &JsValue::from_str("writeText"), &Function::new_no_args("")).unwrap();
        assert!(has_clipboard_api(&navigator_with(&clipboard.into())));
    }
}
