use web_sys::{Document, Element};

use crate::constants::{CLASS_BOOKMARKED, CLASS_LIKED};
use crate::dom_utils::{require, set_toggle_state};
use crate::errors::InteractionError;
use crate::models::ItemRef;

use super::slot_id;

/// Toggle button plus counter, shared by likes and bookmarks.
#[derive(Debug, Clone)]
pub struct ToggleView {
    pub button: Element,
    pub count: Element,
    active_class: &'static str,
}

impl ToggleView {
    /// Slots: `{kind}-like-btn-{id}`, `{kind}-like-count-{id}`.
    pub fn bind_like(document: &Document, item: ItemRef) -> Result<Self, InteractionError> {
        Self::bind(document, item, "like", CLASS_LIKED)
    }

    /// Slots: `{kind}-bookmark-btn-{id}`, `{kind}-bookmark-count-{id}`.
    pub fn bind_bookmark(document: &Document, item: ItemRef) -> Result<Self, InteractionError> {
        Self::bind(document, item, "bookmark", CLASS_BOOKMARKED)
    }

    fn bind(
        document: &Document,
        item: ItemRef,
        slot: &str,
        active_class: &'static str,
    ) -> Result<Self, InteractionError> {
        Ok(Self {
            button: require(document, &slot_id(item, &format!("{}-btn", slot)))?,
            count: require(document, &slot_id(item, &format!("{}-count", slot)))?,
            active_class,
        })
    }

    pub fn apply(&self, active: bool, total: u64) {
        set_toggle_state(&self.button, self.active_class, active);
        self.count.set_text_content(Some(&total.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CLASS_INACTIVE;
    use crate::dom_utils::document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn like_view_toggles_class_and_count() {
        let doc = document().unwrap();
        let host = doc.create_element("div").unwrap();
        host.set_inner_html(
            r#"<button id="event-like-btn-41" class="text-gray-400"></button>
               <span id="event-like-count-41">0</span>"#,
        );
        doc.body().unwrap().append_child(&host).unwrap();

        let view = ToggleView::bind_like(&doc, ItemRef::event(41)).unwrap();
        view.apply(true, 8);
        assert!(view.button.class_list().contains(CLASS_LIKED));
        assert!(!view.button.class_list().contains(CLASS_INACTIVE));
        assert_eq!(view.count.text_content().as_deref(), Some("8"));

        view.apply(false, 7);
        assert!(!view.button.class_list().contains(CLASS_LIKED));
        assert_eq!(view.count.text_content().as_deref(), Some("7"));
        host.remove();
    }

    #[wasm_bindgen_test]
    fn bookmark_view_needs_both_slots() {
        let doc = document().unwrap();
        let host = doc.create_element("div").unwrap();
        host.set_inner_html(r#"<button id="tour-bookmark-btn-42"></button>"#);
        doc.body().unwrap().append_child(&host).unwrap();

        let err = ToggleView::bind_bookmark(&doc, ItemRef::tour(42)).unwrap_err();
        assert_eq!(err, InteractionError::MissingSlot("tour-bookmark-count-42".into()));
        host.remove();
    }
}
