pub mod navbar;

use crate::routes::router::Router;
use leptos::prelude::*;
use navbar::Navbar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Navbar (one entry per top-level page)    |
/// +------------------------------------------+
/// |  #content (fragment loaded by Router)    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let router = use_context::<Router>().expect("Router context not found");

    view! {
        <div class="app-layout">
            <Navbar />
            <div
                id="content"
                class="app-main"
                node_ref=router.content
                on:click=move |ev| router.handle_content_click(&ev)
            ></div>
        </div>
    }
}
