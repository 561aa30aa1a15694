//! Typed view bindings over the host page's markup.
//!
//! The page renders fixed element ids per item (`tour-like-btn-7`, …).  Each
//! view below lists the slots it needs and binds them in one go, so a missing
//! element surfaces as `InteractionError::MissingSlot` before anything is
//! touched.

pub mod booking;
pub mod comments;
pub mod reactions;

pub use booking::BookingFormView;
pub use comments::{CommentFormView, CommentListView};
pub use reactions::ToggleView;

use crate::models::ItemRef;

/// `{kind}-{slot}-{id}`, the naming scheme shared with the templates.
pub fn slot_id(item: ItemRef, slot: &str) -> String {
    format!("{}-{}-{}", item.kind.as_str(), slot, item.id)
}

/// Booking modals are keyed by item id only.
pub fn booking_modal_id(item_id: u32) -> String {
    format!("booking-modal-{}", item_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn ids_follow_template_scheme() {
        assert_eq!(slot_id(ItemRef::tour(7), "like-btn"), "tour-like-btn-7");
        assert_eq!(slot_id(ItemRef::event(12), "comments"), "event-comments-12");
        assert_eq!(booking_modal_id(3), "booking-modal-3");
    }
}
