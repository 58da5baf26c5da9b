//! DOM操作の補助

use gloo::events::EventListener;
use scholar_page_common::{SectionView, SheetKind};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// `file:` で開かれているか（この場合ブラウザがワークブック取得を拒否する）
pub fn is_local_file() -> bool {
    web_sys::window()
        .and_then(|window| window.location().protocol().ok())
        .map(|protocol| protocol == "file:")
        .unwrap_or(false)
}

/// DOM構築後に一度だけ実行
pub fn on_ready<F>(callback: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| callback()).forget();
    } else {
        callback();
    }
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    if let Err(err) = element.style().set_property("display", display) {
        gloo::console::warn!(format!("#{} の表示を切り替えられません", element.id()), err);
    }
}

/// `{type}-loading` / `{type}-container` / `{type}-error` に表示状態を反映
pub fn apply_section_view(document: &Document, kind: SheetKind, view: &SectionView) {
    let elements = SectionElements {
        loading: html_element(document, &kind.loading_id()),
        container: html_element(document, &kind.container_id()),
        error: html_element(document, &kind.error_id()),
    };
    elements.apply(view);
}

/// 1セクション分の要素（ページに無いものは None）
pub struct SectionElements {
    pub loading: Option<HtmlElement>,
    pub container: Option<HtmlElement>,
    pub error: Option<HtmlElement>,
}

impl SectionElements {
    pub fn apply(&self, view: &SectionView) {
        if let Some(loading) = &self.loading {
            set_visible(loading, view.loading_visible());
        }

        if let Some(container) = &self.container {
            if let Some(html) = view.container_html() {
                container.set_inner_html(html);
            }
            set_visible(container, view.container_visible());
        }

        if let Some(error) = &self.error {
            if let Some(html) = view.error_html() {
                error.set_inner_html(html);
            }
            set_visible(error, view.error_visible());
        }
    }
}

pub fn apply_section_views(document: &Document, views: &[(SheetKind, SectionView)]) {
    for (kind, view) in views {
        apply_section_view(document, *kind, view);
    }
}
