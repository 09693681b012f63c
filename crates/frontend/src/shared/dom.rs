use std::collections::BTreeMap;

use contracts::domain::a001_character::SheetSide;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Read/write access to the named controls of a loaded sheet fragment.
///
/// Missing controls are not an error: `read` yields `None` and `write`
/// reports `false` so callers can skip them.
pub trait FieldSurface {
    fn read(&self, id: &str) -> Option<String>;
    fn write(&self, id: &str, value: &str) -> bool;
}

#[derive(Clone)]
enum BoundControl {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
    Text(Element),
}

impl BoundControl {
    fn from_element(element: Element, side: SheetSide) -> Self {
        if side == SheetSide::Display {
            return BoundControl::Text(element);
        }
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return BoundControl::Input(input),
            Err(e) => e,
        };
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return BoundControl::TextArea(area),
            Err(e) => e,
        };
        match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => BoundControl::Select(select),
            Err(e) => BoundControl::Text(e),
        }
    }

    fn value(&self) -> String {
        match self {
            BoundControl::Input(el) => el.value(),
            BoundControl::TextArea(el) => el.value(),
            BoundControl::Select(el) => el.value(),
            BoundControl::Text(el) => el.text_content().unwrap_or_default(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            BoundControl::Input(el) => el.set_value(value),
            BoundControl::TextArea(el) => el.set_value(value),
            BoundControl::Select(el) => el.set_value(value),
            BoundControl::Text(el) => el.set_text_content(Some(value)),
        }
    }
}

/// Element handles of one sheet side, resolved once after the fragment is
/// inserted.
#[derive(Clone)]
pub struct DomSurface {
    side: SheetSide,
    controls: BTreeMap<String, BoundControl>,
}

impl DomSurface {
    pub fn bind(side: SheetSide) -> Self {
        let mut controls = BTreeMap::new();
        let document = web_sys::window().and_then(|w| w.document());
        if let Some(document) = document {
            for id in side.all_element_ids() {
                if let Some(element) = document.get_element_by_id(&id) {
                    controls.insert(id, BoundControl::from_element(element, side));
                }
            }
        }
        log::debug!("Bound {} {:?} controls", controls.len(), side);
        Self { side, controls }
    }

    pub fn side(&self) -> SheetSide {
        self.side
    }
}

impl FieldSurface for DomSurface {
    fn read(&self, id: &str) -> Option<String> {
        self.controls.get(id).map(BoundControl::value)
    }

    fn write(&self, id: &str, value: &str) -> bool {
        match self.controls.get(id) {
            Some(control) => {
                control.set_value(value);
                true
            }
            None => false,
        }
    }
}

/// Nearest ancestor (or the element itself) matching `selector`
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

#[cfg(test)]
pub mod memory {
    use super::FieldSurface;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// In-memory stand-in for a loaded fragment
    #[derive(Default)]
    pub struct MemorySurface {
        values: RefCell<BTreeMap<String, String>>,
    }

    impl MemorySurface {
        /// Surface exposing every id in `ids`, all empty
        pub fn with_ids<I, S>(ids: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let values = ids.into_iter().map(|id| (id.into(), String::new())).collect();
            Self {
                values: RefCell::new(values),
            }
        }

        pub fn fill(&self, id: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(id.to_string(), value.to_string());
        }

        pub fn remove(&self, id: &str) {
            self.values.borrow_mut().remove(id);
        }

        pub fn get(&self, id: &str) -> Option<String> {
            self.values.borrow().get(id).cloned()
        }
    }

    impl FieldSurface for MemorySurface {
        fn read(&self, id: &str) -> Option<String> {
            self.get(id)
        }

        fn write(&self, id: &str, value: &str) -> bool {
            match self.values.borrow_mut().get_mut(id) {
                Some(slot) => {
                    *slot = value.to_string();
                    true
                }
                None => false,
            }
        }
    }
}
