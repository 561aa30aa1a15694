//! Session context handed to every action handler.
//!
//! The host page announces the login state through `window.isAuthenticated`.
//! We read it exactly once when the client is built and pass the resulting
//! [`Session`] around explicitly instead of consulting the global on every
//! click.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub is_authenticated: bool,
}

impl Session {
    pub fn new(is_authenticated: bool) -> Self {
        Self { is_authenticated }
    }

    /// Read `window.isAuthenticated`.  Anything other than a boolean `true`
    /// (missing, `undefined`, a string) counts as logged out.
    pub fn from_window() -> Self {
        let flag = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("isAuthenticated")).ok())
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        Self::new(flag)
    }
}
