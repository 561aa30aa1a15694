//! Guard against duplicate submissions.
//!
//! A key `(item, action)` is held from the moment a request is sent until its
//! response has been handled.  While held, further triggers for the same key
//! are refused; the triggering control (if bound) stays disabled.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use web_sys::Element;

use crate::dom_utils::set_disabled;
use crate::models::{ActionKind, ItemRef};

pub type InFlightKey = (ItemRef, ActionKind);

#[derive(Debug, Clone, Default)]
pub struct InFlightRegistry {
    held: Rc<RefCell<HashSet<InFlightKey>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`.  Returns `None` when a request for it is still pending.
    pub fn try_acquire(&self, key: InFlightKey, control: Option<Element>) -> Option<InFlightTicket> {
        if !self.held.borrow_mut().insert(key) {
            return None;
        }
        if let Some(el) = &control {
            set_disabled(el, true);
        }
        Some(InFlightTicket {
            key,
            control,
            held: Rc::clone(&self.held),
        })
    }

    pub fn is_held(&self, key: &InFlightKey) -> bool {
        self.held.borrow().contains(key)
    }

    pub fn len(&self) -> usize {
        self.held.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Releases its key and re-enables the control on drop.
#[derive(Debug)]
pub struct InFlightTicket {
    key: InFlightKey,
    control: Option<Element>,
    held: Rc<RefCell<HashSet<InFlightKey>>>,
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.held.borrow_mut().remove(&self.key);
        if let Some(el) = &self.control {
            set_disabled(el, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom_utils::document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn same_key_is_refused_until_released() {
        let registry = InFlightRegistry::new();
        let key = (ItemRef::tour(1), ActionKind::Like);

        let ticket = registry.try_acquire(key, None).expect("first acquire");
        assert!(registry.try_acquire(key, None).is_none());
        assert!(registry.is_held(&key));

        drop(ticket);
        assert!(!registry.is_held(&key));
        assert!(registry.try_acquire(key, None).is_some());
        assert!(registry.is_empty());
    }

    #[wasm_bindgen_test]
    fn other_items_and_actions_do_not_block() {
        let registry = InFlightRegistry::new();
        let _a = registry.try_acquire((ItemRef::tour(1), ActionKind::Like), None).unwrap();
        let _b = registry.try_acquire((ItemRef::tour(2), ActionKind::Like), None).unwrap();
        let _c = registry.try_acquire((ItemRef::tour(1), ActionKind::Bookmark), None).unwrap();
        let _d = registry.try_acquire((ItemRef::event(1), ActionKind::Like), None).unwrap();
        assert_eq!(registry.len(), 4);
    }

    #[wasm_bindgen_test]
    fn control_disabled_while_held() {
        let btn = document().unwrap().create_element("button").unwrap();
        let registry = InFlightRegistry::new();

        let ticket = registry
            .try_acquire((ItemRef::event(5), ActionKind::Book), Some(btn.clone()))
            .unwrap();
        assert!(btn.has_attribute("disabled"));
        drop(ticket);
        assert!(!btn.has_attribute("disabled"));
    }
}
