//! DOM反映のテスト（ブラウザで実行）

use scholar_page_common::{failure_views, Error, HomepageConfig, SectionView, SheetKind};
use scholar_page_wasm::config::{load_page_config, CONFIG_ELEMENT_ID};
use scholar_page_wasm::dom::{self, SectionElements};
use scholar_page_wasm::loader::fetch_content;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn detached_div() -> HtmlElement {
    dom::document()
        .unwrap()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn section() -> SectionElements {
    SectionElements {
        loading: Some(detached_div()),
        container: Some(detached_div()),
        error: Some(detached_div()),
    }
}

fn display(element: &Option<HtmlElement>) -> String {
    element
        .as_ref()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

#[wasm_bindgen_test]
fn test_populated_section() {
    let elements = section();
    elements.apply(&SectionView::Populated("<li>x.</li>".into()));

    assert_eq!(display(&elements.loading), "none");
    assert_eq!(display(&elements.container), "block");
    assert_eq!(display(&elements.error), "none");
    assert_eq!(elements.container.as_ref().unwrap().inner_html(), "<li>x.</li>");
}

#[wasm_bindgen_test]
fn test_failed_section() {
    let views = failure_views(&Error::Fetch { status: 404 }, false, &HomepageConfig::default());
    for (_, view) in &views {
        let elements = section();
        elements.apply(view);

        assert_eq!(display(&elements.loading), "none");
        assert_eq!(display(&elements.container), "none");
        assert_eq!(display(&elements.error), "block");
        assert!(elements.error.as_ref().unwrap().inner_html().contains("404"));
    }
}

#[wasm_bindgen_test]
fn test_missing_elements_are_skipped() {
    let elements = SectionElements { loading: None, container: Some(detached_div()), error: None };
    elements.apply(&SectionView::Hidden);
    assert_eq!(display(&elements.container), "none");
}

#[wasm_bindgen_test]
fn test_page_config_from_script() {
    let document = dom::document().unwrap();
    let script = document.create_element("script").unwrap();
    script.set_id(CONFIG_ELEMENT_ID);
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(r#"{"highlightedAuthor": "Ada Lovelace"}"#));
    document.body().unwrap().append_child(&script).unwrap();

    let config = load_page_config(&document);
    assert_eq!(config.highlighted_author, "Ada Lovelace");
    assert_eq!(config.workbook_path, "publications.xlsx");

    script.remove();
}

/// `{type}-loading` などの id を持つ要素をページに追加
fn attach_section(kind: SheetKind) -> Vec<web_sys::Element> {
    let document = dom::document().unwrap();
    let body = document.body().unwrap();
    [kind.loading_id(), kind.container_id(), kind.error_id()]
        .iter()
        .map(|id| {
            let element = document.create_element("div").unwrap();
            element.set_id(id);
            body.append_child(&element).unwrap();
            element
        })
        .collect()
}

#[wasm_bindgen_test]
async fn test_missing_workbook_fails_every_section() {
    let config = HomepageConfig {
        workbook_path: "no-such-workbook.xlsx".into(),
        ..HomepageConfig::default()
    };

    let err = match fetch_content(&config).await {
        Ok(_) => panic!("存在しないワークブックが読み込めてしまった"),
        Err(err) => err,
    };
    assert!(matches!(err, Error::Fetch { status: 404 }), "{:?}", err);

    let attached: Vec<_> = SheetKind::ALL.iter().flat_map(|kind| attach_section(*kind)).collect();
    let document = dom::document().unwrap();
    dom::apply_section_views(&document, &failure_views(&err, dom::is_local_file(), &config));

    for kind in SheetKind::ALL {
        let display = |id: String| {
            document
                .get_element_by_id(&id)
                .unwrap()
                .dyn_into::<HtmlElement>()
                .unwrap()
                .style()
                .get_property_value("display")
                .unwrap()
        };
        assert_eq!(display(kind.loading_id()), "none");
        assert_eq!(display(kind.container_id()), "none");
        assert_eq!(display(kind.error_id()), "block");

        let error = document.get_element_by_id(&kind.error_id()).unwrap().inner_html();
        assert!(error.contains("HTTP error! status: 404"));
    }

    for element in attached {
        element.remove();
    }
}
