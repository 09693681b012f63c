use contracts::domain::a002_inventory::{catalog, InventoryItem, ALL_CATEGORY};

/// Values shown in the item detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    pub name: String,
    pub description: String,
    pub value: String,
    pub quantity: String,
}

impl From<&InventoryItem> for ItemDetails {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: item.name.to_string(),
            description: item.description.to_string(),
            value: item.value_label(),
            quantity: item.quantity.to_string(),
        }
    }
}

/// Active category and selected item of the inventory page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryState {
    pub active_category: String,
    pub selected_item: Option<String>,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl InventoryState {
    /// Start on the category marked active in markup, else "all"
    pub fn new(marked_active: Option<&str>) -> Self {
        let active_category = marked_active
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(ALL_CATEGORY)
            .to_string();
        Self {
            active_category,
            selected_item: None,
        }
    }

    /// Switch category; returns the id of the section to reveal.
    pub fn select_category(&mut self, key: &str) -> String {
        self.active_category = key.to_string();
        section_id(key)
    }

    /// Mark an item selected. Details are `None` for ids not in the catalog.
    pub fn select_item(&mut self, item_id: &str) -> Option<ItemDetails> {
        self.selected_item = Some(item_id.to_string());
        catalog().find_item(item_id).map(ItemDetails::from)
    }
}

pub fn section_id(category: &str) -> String {
    format!("{}-section", category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_category_follows_markup() {
        assert_eq!(InventoryState::new(None).active_category, "all");
        assert_eq!(InventoryState::new(Some("  ")).active_category, "all");
        assert_eq!(
            InventoryState::new(Some("weapons")).active_category,
            "weapons"
        );
    }

    #[test]
    fn category_change_keeps_selection() {
        let mut state = InventoryState::default();
        state.select_item("cyberware-1");
        assert_eq!(state.select_category("cyberware"), "cyberware-section");
        assert_eq!(state.active_category, "cyberware");
        assert_eq!(state.selected_item.as_deref(), Some("cyberware-1"));
    }

    #[test]
    fn selecting_known_item_yields_details() {
        let mut state = InventoryState::default();
        let first = catalog().categories()[0].items[0];
        let details = state.select_item(first.id).unwrap();
        assert_eq!(details.name, first.name);
        assert_eq!(details.value, format!("{} EB", first.value));
        assert_eq!(details.quantity, first.quantity.to_string());
        assert_eq!(state.selected_item.as_deref(), Some(first.id));
    }

    #[test]
    fn unknown_item_is_selected_without_details() {
        let mut state = InventoryState::default();
        assert_eq!(state.select_item("no-such-item"), None);
        assert_eq!(state.selected_item.as_deref(), Some("no-such-item"));
    }
}
