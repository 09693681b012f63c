use crate::routes::fragment::NAV_ENTRIES;
use crate::routes::router::Router;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_context::<Router>().expect("Router context not found");

    view! {
        <nav class="menu">
            {NAV_ENTRIES.iter().map(|entry| {
                view! {
                    <a
                        class="menu-button"
                        class:active=move || router.is_active(entry.hash)
                        href=entry.hash
                        data-page=entry.fragment.path()
                        on:click=move |ev| {
                            ev.prevent_default();
                            router.follow(entry);
                        }
                    >
                        {entry.label}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
