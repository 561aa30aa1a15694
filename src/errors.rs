//! Failure classes of the interaction handlers.
//!
//! Every handler funnels its failures through [`InteractionError`] so the
//! dispatcher can decide in one place whether the user sees a warning, the
//! server's message, a generic error, or nothing at all.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::constants::MSG_LOGIN_REQUIRED;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("{}", MSG_LOGIN_REQUIRED)]
    NotAuthenticated,

    /// Local precondition on user input failed; carries the warning text.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// A DOM element the view binding requires is absent or of the wrong type.
    #[error("required element #{0} is missing")]
    MissingSlot(String),

    /// The same action on the same item is still awaiting its response.
    #[error("request already in flight")]
    Duplicate,

    /// The server answered with an `error` field.
    #[error("{0}")]
    Server(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl InteractionError {
    /// Transport and decode failures look the same to the user.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }

    /// Client-side precondition failures, reported as warnings before any
    /// request leaves the page.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::InvalidInput(_))
    }
}

impl From<serde_json::Error> for InteractionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<InteractionError> for JsValue {
    fn from(e: InteractionError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
