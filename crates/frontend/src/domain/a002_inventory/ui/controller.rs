use super::state::{InventoryState, ItemDetails};

pub const DETAIL_FIELDS: [&str; 4] = ["info-name", "info-description", "info-value", "info-quantity"];

/// Class and text access to a loaded inventory fragment.
pub trait InventorySurface {
    /// `data-category` of the button marked active in markup
    fn marked_category(&self) -> Option<String>;
    fn category_keys(&self) -> Vec<String>;
    fn section_ids(&self) -> Vec<String>;
    fn set_button_active(&self, key: &str, active: bool);
    fn set_section_hidden(&self, id: &str, hidden: bool);
    fn has_field(&self, id: &str) -> bool;
    fn set_field(&self, id: &str, text: &str);
}

/// Category filter and item selection of a loaded inventory fragment.
///
/// Owns its state; the router drops it together with the fragment.
pub struct InventoryController<S> {
    pub(super) surface: S,
    state: InventoryState,
}

impl<S: InventorySurface> InventoryController<S> {
    pub fn init(surface: S) -> Self {
        let marked = surface.marked_category();
        let mut controller = Self {
            surface,
            state: InventoryState::new(marked.as_deref()),
        };
        let initial = controller.state.active_category.clone();
        controller.show_category(&initial);
        log::debug!("Inventory ready on category '{}'", initial);
        controller
    }

    /// Activate only `key`'s button and reveal only its section
    pub fn show_category(&mut self, key: &str) {
        let section = self.state.select_category(key);

        for button in self.surface.category_keys() {
            self.surface.set_button_active(&button, button == key);
        }
        let sections = self.surface.section_ids();
        if !sections.contains(&section) {
            log::warn!("No inventory section #{}", section);
        }
        for id in sections {
            self.surface.set_section_hidden(&id, id != section);
        }
    }

    /// Record the selection and project it into the detail panel
    pub fn select_item(&mut self, item_id: &str) {
        match self.state.select_item(item_id) {
            Some(details) => self.show_details(&details),
            None => log::debug!("Item '{}' is not in the catalog", item_id),
        }
    }

    fn show_details(&self, details: &ItemDetails) {
        if !DETAIL_FIELDS.iter().all(|id| self.surface.has_field(id)) {
            log::warn!("Inventory detail panel is incomplete, leaving it unchanged");
            return;
        }
        let values = [
            &details.name,
            &details.description,
            &details.value,
            &details.quantity,
        ];
        for (id, value) in DETAIL_FIELDS.iter().zip(values) {
            self.surface.set_field(id, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_inventory::ui::state::section_id;
    use contracts::domain::a002_inventory::catalog;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    const KEYS: [&str; 6] = ["all", "weapons", "vehicles", "equipment", "cyberware", "misc"];

    struct MemoryInventory {
        marked: Option<String>,
        buttons: RefCell<BTreeMap<String, bool>>,
        hidden: RefCell<BTreeMap<String, bool>>,
        fields: RefCell<BTreeMap<String, String>>,
    }

    impl MemoryInventory {
        fn new(marked: Option<&str>) -> Self {
            Self {
                marked: marked.map(str::to_string),
                buttons: RefCell::new(KEYS.iter().map(|k| (k.to_string(), false)).collect()),
                hidden: RefCell::new(KEYS.iter().map(|k| (section_id(k), false)).collect()),
                fields: RefCell::new(
                    DETAIL_FIELDS
                        .iter()
                        .map(|id| (id.to_string(), "-".to_string()))
                        .collect(),
                ),
            }
        }

        fn active_buttons(&self) -> Vec<String> {
            let buttons = self.buttons.borrow();
            buttons.iter().filter(|(_, a)| **a).map(|(k, _)| k.clone()).collect()
        }

        fn visible_sections(&self) -> Vec<String> {
            let hidden = self.hidden.borrow();
            hidden.iter().filter(|(_, h)| !**h).map(|(k, _)| k.clone()).collect()
        }

        fn field(&self, id: &str) -> Option<String> {
            self.fields.borrow().get(id).cloned()
        }
    }

    impl InventorySurface for MemoryInventory {
        fn marked_category(&self) -> Option<String> {
            self.marked.clone()
        }

        fn category_keys(&self) -> Vec<String> {
            self.buttons.borrow().keys().cloned().collect()
        }

        fn section_ids(&self) -> Vec<String> {
            self.hidden.borrow().keys().cloned().collect()
        }

        fn set_button_active(&self, key: &str, active: bool) {
            self.buttons.borrow_mut().insert(key.to_string(), active);
        }

        fn set_section_hidden(&self, id: &str, hidden: bool) {
            self.hidden.borrow_mut().insert(id.to_string(), hidden);
        }

        fn has_field(&self, id: &str) -> bool {
            self.fields.borrow().contains_key(id)
        }

        fn set_field(&self, id: &str, text: &str) {
            self.fields.borrow_mut().insert(id.to_string(), text.to_string());
        }
    }

    #[test]
    fn starts_on_marked_category() {
        let controller = InventoryController::init(MemoryInventory::new(None));
        assert_eq!(controller.surface.active_buttons(), vec!["all"]);
        assert_eq!(controller.surface.visible_sections(), vec!["all-section"]);

        let controller = InventoryController::init(MemoryInventory::new(Some("misc")));
        assert_eq!(controller.surface.active_buttons(), vec!["misc"]);
        assert_eq!(controller.surface.visible_sections(), vec!["misc-section"]);
    }

    #[test]
    fn each_category_click_leaves_exactly_one_visible() {
        let mut controller = InventoryController::init(MemoryInventory::new(None));

        controller.show_category("weapons");
        assert_eq!(controller.surface.active_buttons(), vec!["weapons"]);
        assert_eq!(controller.surface.visible_sections(), vec!["weapons-section"]);

        controller.show_category("cyberware");
        assert_eq!(controller.surface.active_buttons(), vec!["cyberware"]);
        assert_eq!(controller.surface.visible_sections(), vec!["cyberware-section"]);
        assert_eq!(controller.state.active_category, "cyberware");
    }

    #[test]
    fn category_change_keeps_detail_panel() {
        let mut controller = InventoryController::init(MemoryInventory::new(None));
        controller.select_item("weapon-1");
        let name = controller.surface.field("info-name");
        controller.show_category("misc");
        assert_eq!(controller.surface.field("info-name"), name);
        assert_eq!(controller.state.selected_item.as_deref(), Some("weapon-1"));
    }

    #[test]
    fn selecting_item_fills_all_four_fields() {
        let mut controller = InventoryController::init(MemoryInventory::new(None));
        let item = catalog().find_item("cyberware-2").unwrap();
        controller.select_item("cyberware-2");

        let surface = &controller.surface;
        assert_eq!(surface.field("info-name").as_deref(), Some(item.name));
        assert_eq!(surface.field("info-description").as_deref(), Some(item.description));
        assert_eq!(
            surface.field("info-value"),
            Some(format!("{} EB", item.value))
        );
        assert_eq!(surface.field("info-quantity"), Some(item.quantity.to_string()));
    }

    #[test]
    fn incomplete_panel_is_left_unchanged() {
        let inventory = MemoryInventory::new(None);
        inventory.fields.borrow_mut().remove("info-quantity");
        let mut controller = InventoryController::init(inventory);

        controller.select_item("weapon-1");
        for id in ["info-name", "info-description", "info-value"] {
            assert_eq!(controller.surface.field(id).as_deref(), Some("-"));
        }
        assert_eq!(controller.surface.field("info-quantity"), None);
        assert_eq!(controller.state.selected_item.as_deref(), Some("weapon-1"));
    }

    #[test]
    fn unknown_item_leaves_panel_unchanged() {
        let mut controller = InventoryController::init(MemoryInventory::new(None));
        controller.select_item("weapon-2");
        let before: Vec<_> = DETAIL_FIELDS.iter().map(|id| controller.surface.field(id)).collect();

        controller.select_item("no-such-item");
        let after: Vec<_> = DETAIL_FIELDS.iter().map(|id| controller.surface.field(id)).collect();
        assert_eq!(before, after);
    }
}
