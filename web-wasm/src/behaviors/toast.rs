//! トースト通知

use gloo::timers::callback::Timeout;
use scholar_page_common::ToastSettings;

/// `div.notification` を追加し、`show` クラスの付け外しの後に取り除く
pub fn show_notification(settings: &ToastSettings) {
    let Some(document) = crate::dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(notification) = document.create_element("div") else {
        return;
    };
    notification.set_class_name("notification");
    notification.set_text_content(Some(&settings.message));
    if body.append_child(&notification).is_err() {
        return;
    }

    let shown = notification.clone();
    Timeout::new(settings.show_delay_ms, move || {
        let _ = shown.class_list().add_1("show");
    })
    .forget();

    let fade_ms = settings.fade_ms;
    Timeout::new(settings.visible_ms, move || {
        let _ = notification.class_list().remove_1("show");
        Timeout::new(fade_ms, move || notification.remove()).forget();
    })
    .forget();
}
