use web_sys::{Document, Element};

use crate::constants::MSG_INVALID_PARTICIPANTS;
use crate::dom_utils::{require_text_field, TextField};
use crate::errors::InteractionError;
use crate::models::{BookingPayload, ItemRef};

use super::slot_id;

/// Slots: `{kind}-participants-{id}`, `{kind}-special-requests-{id}`, and the
/// optional `{kind}-book-btn-{id}` trigger.
#[derive(Debug, Clone)]
pub struct BookingFormView {
    pub participants: TextField,
    pub special_requests: TextField,
    pub submit: Option<Element>,
}

impl BookingFormView {
    pub fn bind(document: &Document, item: ItemRef) -> Result<Self, InteractionError> {
        Ok(Self {
            participants: require_text_field(document, &slot_id(item, "participants"))?,
            special_requests: require_text_field(document, &slot_id(item, "special-requests"))?,
            submit: document.get_element_by_id(&slot_id(item, "book-btn")),
        })
    }

    pub fn payload(&self) -> Result<BookingPayload, InteractionError> {
        booking_payload(&self.participants.value(), &self.special_requests.value())
    }
}

/// Validate the raw form values.  Participants must be a whole number of at
/// least one; special requests are passed through untouched.
pub fn booking_payload(participants: &str, special_requests: &str) -> Result<BookingPayload, InteractionError> {
    let participants = participants
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or(InteractionError::InvalidInput(MSG_INVALID_PARTICIPANTS))?;

    Ok(BookingPayload {
        participants,
        special_requests: special_requests.to_string(),
    })
}
