use crate::layout::Shell;
use crate::routes::router::Router;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let router = Router::new();
    provide_context(router);

    // Back/forward and hand-edited hashes
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        router.sync_with_location();
    });

    // Initial page, once the content area exists
    Effect::new(move |_| router.sync_with_location());

    view! {
        <Shell />
    }
}
