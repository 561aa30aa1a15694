//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Lookups return [`InteractionError::MissingSlot`] instead of panicking so
//! the view bindings can treat an absent element as a checked precondition.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use crate::constants::{CLASS_HIDDEN, CLASS_INACTIVE};
use crate::errors::InteractionError;

/// Current page document, if any.
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Fetch an element by id or report the missing slot.
pub fn require(document: &Document, id: &str) -> Result<Element, InteractionError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| InteractionError::MissingSlot(id.to_string()))
}

/// A text-bearing form control: `<input>` or `<textarea>`.
#[derive(Debug, Clone)]
pub enum TextField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    pub fn value(&self) -> String {
        match self {
            TextField::Input(el) => el.value(),
            TextField::TextArea(el) => el.value(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            TextField::Input(el) => el.set_value(value),
            TextField::TextArea(el) => el.set_value(value),
        }
    }
}

/// Fetch an `<input>` or `<textarea>` by id.  Any other element type counts
/// as a missing slot.
pub fn require_text_field(document: &Document, id: &str) -> Result<TextField, InteractionError> {
    let el = require(document, id)?;
    let el = match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Ok(TextField::Input(input)),
        Err(el) => el,
    };
    el.dyn_into::<HtmlTextAreaElement>()
        .map(TextField::TextArea)
        .map_err(|_| InteractionError::MissingSlot(id.to_string()))
}

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1(CLASS_HIDDEN);
}

/// Hide the element by adding the `hidden` class.
pub fn hide(el: &Element) {
    let _ = el.class_list().add_1(CLASS_HIDDEN);
}

/// Swap between `active_class` and the neutral grey state.
pub fn set_toggle_state(el: &Element, active_class: &str, active: bool) {
    let classes = el.class_list();
    if active {
        let _ = classes.add_1(active_class);
        let _ = classes.remove_1(CLASS_INACTIVE);
    } else {
        let _ = classes.remove_1(active_class);
        let _ = classes.add_1(CLASS_INACTIVE);
    }
}

/// Toggle the `disabled` attribute (works for any control type).
pub fn set_disabled(el: &Element, disabled: bool) {
    if disabled {
        let _ = el.set_attribute("disabled", "");
        let _ = el.set_attribute("aria-busy", "true");
    } else {
        let _ = el.remove_attribute("disabled");
        let _ = el.remove_attribute("aria-busy");
    }
}

// ---------------------------------------------------------------------------
// Unit tests (run with `wasm-pack test --headless`)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(html: &str) -> Element {
        let doc = document().unwrap();
        let host = doc.create_element("div").unwrap();
        host.set_inner_html(html);
        doc.body().unwrap().append_child(&host).unwrap();
        host
    }

    #[wasm_bindgen_test]
    fn require_reports_missing_id() {
        let doc = document().unwrap();
        assert_eq!(
            require(&doc, "dom-utils-nope").unwrap_err(),
            InteractionError::MissingSlot("dom-utils-nope".into())
        );
    }

    #[wasm_bindgen_test]
    fn text_fields_accept_input_and_textarea_only() {
        let host = mount(
            r#"<input id="du-input" value="a"><textarea id="du-area">b</textarea><div id="du-div"></div>"#,
        );
        let doc = document().unwrap();

        assert_eq!(require_text_field(&doc, "du-input").unwrap().value(), "a");
        let area = require_text_field(&doc, "du-area").unwrap();
        assert_eq!(area.value(), "b");
        area.set_value("");
        assert_eq!(area.value(), "");
        assert!(matches!(
            require_text_field(&doc, "du-div"),
            Err(InteractionError::MissingSlot(_))
        ));
        host.remove();
    }

    #[wasm_bindgen_test]
    fn toggle_and_visibility_classes() {
        let host = mount(r#"<button id="du-btn" class="text-gray-400"></button>"#);
        let btn = require(&document().unwrap(), "du-btn").unwrap();

        set_toggle_state(&btn, "text-red-500", true);
        assert!(btn.class_list().contains("text-red-500"));
        assert!(!btn.class_list().contains(CLASS_INACTIVE));

        set_toggle_state(&btn, "text-red-500", false);
        assert!(!btn.class_list().contains("text-red-500"));
        assert!(btn.class_list().contains(CLASS_INACTIVE));

        hide(&btn);
        assert!(btn.class_list().contains(CLASS_HIDDEN));
        show(&btn);
        assert!(!btn.class_list().contains(CLASS_HIDDEN));

        set_disabled(&btn, true);
        assert!(btn.has_attribute("disabled"));
        set_disabled(&btn, false);
        assert!(!btn.has_attribute("disabled"));
        host.remove();
    }
}
