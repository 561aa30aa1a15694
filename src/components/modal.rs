//! Booking modal visibility.
//!
//! Only toggles the `hidden` class on `booking-modal-{id}`; focus handling,
//! stacking and keyboard dismissal are left to the page.

use web_sys::{Document, Element};

use crate::dom_utils;
use crate::errors::InteractionError;
use crate::views::booking_modal_id;

#[derive(Debug, Clone)]
pub struct BookingModal {
    pub backdrop: Element,
}

impl BookingModal {
    pub fn bind(document: &Document, item_id: u32) -> Result<Self, InteractionError> {
        Ok(Self {
            backdrop: dom_utils::require(document, &booking_modal_id(item_id))?,
        })
    }

    pub fn show(&self) {
        dom_utils::show(&self.backdrop);
    }

    pub fn hide(&self) {
        dom_utils::hide(&self.backdrop);
    }

    pub fn is_open(&self) -> bool {
        !self.backdrop.class_list().contains(crate::constants::CLASS_HIDDEN)
    }
}

pub fn open_booking_modal(document: &Document, item_id: u32) -> Result<(), InteractionError> {
    BookingModal::bind(document, item_id)?.show();
    Ok(())
}

pub fn close_booking_modal(document: &Document, item_id: u32) -> Result<(), InteractionError> {
    BookingModal::bind(document, item_id)?.hide();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom_utils::document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn open_then_close() {
        let doc = document().unwrap();
        let host = doc.create_element("div").unwrap();
        host.set_inner_html(r#"<div id="booking-modal-61" class="modal hidden"></div>"#);
        doc.body().unwrap().append_child(&host).unwrap();

        open_booking_modal(&doc, 61).unwrap();
        let modal = BookingModal::bind(&doc, 61).unwrap();
        assert!(modal.is_open());

        close_booking_modal(&doc, 61).unwrap();
        assert!(!modal.is_open());
        assert!(modal.backdrop.class_list().contains("modal"));
        host.remove();
    }

    #[wasm_bindgen_test]
    fn missing_modal_is_reported() {
        let doc = document().unwrap();
        assert_eq!(
            open_booking_modal(&doc, 99_999).unwrap_err(),
            InteractionError::MissingSlot("booking-modal-99999".into())
        );
    }
}
