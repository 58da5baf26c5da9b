//! トップへ戻るボタン

use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// スクロール量が `threshold` を超えると `visible` クラスが付く
#[component]
pub fn ScrollToTop(threshold: f64) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        set_visible.set(offset > threshold);
    });
    on_cleanup(move || handle.remove());

    view! {
        <button
            class="scroll-to-top"
            class:visible=move || visible.get()
            aria-label="Scroll to top"
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}

fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// body末尾にボタンを追加
pub fn mount(threshold: f64) {
    leptos::mount::mount_to_body(move || view! { <ScrollToTop threshold=threshold /> });
}
