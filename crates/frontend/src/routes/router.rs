use contracts::domain::a001_character::SheetSide;
use gloo_net::http::Request;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::fragment::{resolve_hash, Fragment, NavEntry};
use super::navigation::{NavigationGuard, NavigationTicket};
use crate::domain::a001_character::ui::bio::{save_follow_up, ApiStore, FormSync, SaveFollowUp};
use crate::domain::a002_inventory::ui::{DomInventory, InventoryController};
use crate::shared::dom::{closest, DomSurface};

const ERROR_FRAGMENT: &str = "<h1>Error loading page</h1>";

/// Per-fragment state, replaced whenever new content is mounted
enum ActivePage {
    Bio(DomSurface),
    Inventory(InventoryController<DomInventory>),
}

/// Loads fragments into the content area and keeps the navigation in sync.
#[derive(Clone, Copy)]
pub struct Router {
    pub content: NodeRef<Div>,
    active_hash: RwSignal<Option<&'static str>>,
    guard: StoredValue<NavigationGuard>,
    page: StoredValue<Option<ActivePage>, LocalStorage>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            content: NodeRef::new(),
            active_hash: RwSignal::new(None),
            guard: StoredValue::new(NavigationGuard::default()),
            page: StoredValue::new_local(None),
        }
    }

    pub fn is_active(&self, hash: &str) -> bool {
        self.active_hash.get() == Some(hash)
    }

    /// Fetch a fragment and mount it unless a newer navigation started meanwhile.
    pub fn navigate(&self, fragment: Fragment) {
        let mut ticket = NavigationTicket::default();
        self.guard.update_value(|guard| ticket = guard.begin());

        let router = *self;
        spawn_local(async move {
            let result = fetch_fragment(fragment.path()).await;
            if !router.guard.with_value(|guard| guard.is_current(ticket)) {
                log::debug!("Discarding stale response for {}", fragment.path());
                return;
            }
            match result {
                Ok(html) => router.mount(fragment, &html),
                Err(e) => {
                    log::error!("Failed to load {}: {}", fragment.path(), e);
                    router.mount_error();
                }
            }
        });
    }

    /// Top-level navigation click
    pub fn follow(&self, entry: &'static NavEntry) {
        self.navigate(entry.fragment);
        self.active_hash.set(Some(entry.hash));
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(entry.hash);
        }
    }

    /// In-fragment link. Stays on the current nav entry when the fragment
    /// belongs to it (bio and bio-edit share `#bio`).
    fn open_in_family(&self, fragment: Fragment) {
        self.navigate(fragment);
        let hash = fragment.nav_hash();
        if self.active_hash.get_untracked() != Some(hash) {
            self.active_hash.set(Some(hash));
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_hash(hash);
            }
        }
    }

    /// Initial load and `hashchange`
    pub fn sync_with_location(&self) {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        let Some(entry) = resolve_hash(&hash) else {
            log::warn!("Ignoring unknown hash '{}'", hash);
            return;
        };
        // set by our own click handling
        if self.active_hash.get_untracked() == Some(entry.hash) {
            return;
        }
        self.navigate(entry.fragment);
        self.active_hash.set(Some(entry.hash));
    }

    /// Delegated clicks on whatever fragment is mounted
    pub fn handle_content_click(&self, ev: &MouseEvent) {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        if let Some(control) = closest(&target, "[data-action]") {
            if control.get_attribute("data-action").as_deref() == Some("save-bio") {
                ev.prevent_default();
                self.save_bio();
            }
            return;
        }

        if let Some(link) = closest(&target, "[data-page]") {
            ev.prevent_default();
            let page = link.get_attribute("data-page").unwrap_or_default();
            match Fragment::from_path(&page) {
                Some(fragment) => self.open_in_family(fragment),
                None => log::warn!("Unknown fragment '{}'", page),
            }
            return;
        }

        self.page.update_value(|page| {
            if let Some(ActivePage::Inventory(controller)) = page {
                controller.handle_click(&target);
            }
        });
    }

    fn mount(&self, fragment: Fragment, html: &str) {
        let Some(content) = self.content.get_untracked() else {
            log::error!("Content area is not mounted");
            return;
        };
        content.set_inner_html(html);

        let page = match fragment {
            Fragment::Bio | Fragment::BioEdit => {
                let side = if fragment == Fragment::BioEdit {
                    SheetSide::Edit
                } else {
                    SheetSide::Display
                };
                let surface = DomSurface::bind(side);
                load_bio(surface.clone());
                Some(ActivePage::Bio(surface))
            }
            Fragment::Inventory => Some(ActivePage::Inventory(InventoryController::init(
                DomInventory::new(&content),
            ))),
        };
        self.page.set_value(page);
    }

    fn mount_error(&self) {
        if let Some(content) = self.content.get_untracked() {
            content.set_inner_html(ERROR_FRAGMENT);
        }
        self.page.set_value(None);
    }

    fn save_bio(&self) {
        let surface = self.page.with_value(|page| match page {
            Some(ActivePage::Bio(surface)) if surface.side() == SheetSide::Edit => {
                Some(surface.clone())
            }
            _ => None,
        });
        let Some(surface) = surface else {
            log::warn!("Save requested outside the bio editor");
            return;
        };

        let router = *self;
        spawn_local(async move {
            let result = FormSync::new(ApiStore::default()).save(&surface).await;
            match save_follow_up(&result) {
                SaveFollowUp::Navigate(fragment) => router.navigate(fragment),
                SaveFollowUp::Alert(message) => {
                    log::error!("{}", message);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                }
            }
        });
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

fn load_bio(surface: DomSurface) {
    spawn_local(async move {
        let sync = FormSync::new(ApiStore::default());
        let result = match surface.side() {
            SheetSide::Edit => sync.load_to_edit(&surface).await,
            SheetSide::Display => sync.load_to_display(&surface).await,
        };
        if let Err(e) = result {
            log::error!("Error loading character data: {}", e);
        }
    });
}

async fn fetch_fragment(path: &str) -> Result<String, String> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
