use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::posts_list::PostsList;
use crate::props::load_page_props;
use crate::state::ListingState;

/// `id` контейнера, в который сервер рендерит статический список.
const LISTING_ROOT_ID: &str = "listing";

#[component]
pub fn App() -> impl IntoView {
    let state = ListingState::new(load_page_props().unwrap_or_default());

    view! { <PostsList state=state /> }
}

/// Заменяет статический список на интерактивный; без контейнера монтирует
/// приложение в `<body>`.
pub(crate) fn mount() {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(LISTING_ROOT_ID));

    match root {
        Some(root) => {
            root.set_inner_html("");
            let root: web_sys::HtmlElement = root.unchecked_into();
            leptos::mount::mount_to(root, App).forget();
        }
        None => leptos::mount::mount_to_body(App),
    }
}
