use wasm_bindgen::JsCast;
use web_sys::Element;

use super::controller::{InventoryController, InventorySurface};
use crate::shared::dom::closest;

/// Inventory fragment mounted under `root`
pub struct DomInventory {
    root: Element,
}

impl DomInventory {
    pub fn new(root: &Element) -> Self {
        Self { root: root.clone() }
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.root.query_selector(&format!("#{}", id)).ok().flatten()
    }
}

impl InventorySurface for DomInventory {
    fn marked_category(&self) -> Option<String> {
        self.root
            .query_selector(".inventory-category-btn.active")
            .ok()
            .flatten()
            .and_then(|button| button.get_attribute("data-category"))
    }

    fn category_keys(&self) -> Vec<String> {
        select_all(&self.root, ".inventory-category-btn")
            .iter()
            .filter_map(|button| button.get_attribute("data-category"))
            .collect()
    }

    fn section_ids(&self) -> Vec<String> {
        select_all(&self.root, ".inventory-section")
            .iter()
            .map(Element::id)
            .filter(|id| !id.is_empty())
            .collect()
    }

    fn set_button_active(&self, key: &str, active: bool) {
        for button in select_all(&self.root, ".inventory-category-btn") {
            if button.get_attribute("data-category").as_deref() == Some(key) {
                let _ = button.class_list().toggle_with_force("active", active);
            }
        }
    }

    fn set_section_hidden(&self, id: &str, hidden: bool) {
        if let Some(section) = self.by_id(id) {
            let _ = section.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn has_field(&self, id: &str) -> bool {
        self.by_id(id).is_some()
    }

    fn set_field(&self, id: &str, text: &str) {
        if let Some(field) = self.by_id(id) {
            field.set_text_content(Some(text));
        }
    }
}

impl InventoryController<DomInventory> {
    /// Route a click inside the fragment: category buttons and items of the
    /// center panel. Anything else is ignored.
    pub fn handle_click(&mut self, target: &Element) {
        if let Some(button) = closest(target, ".inventory-category-btn") {
            if let Some(key) = button.get_attribute("data-category") {
                self.show_category(&key);
            }
            return;
        }
        if closest(target, ".inventory-center-panel").is_none() {
            return;
        }
        let Some(item) = closest(target, ".inventory-item") else {
            return;
        };

        for selected in select_all(&self.surface.root, ".inventory-item.selected") {
            let _ = selected.class_list().remove_1("selected");
        }
        let _ = item.class_list().add_1("selected");

        if let Some(id) = item.get_attribute("data-item-id") {
            self.select_item(&id);
        }
    }
}

fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
