//! Legacy global functions.
//!
//! Listing templates call `likeTour(7)`, `bookEvent(3)`, `showNotification(…)`
//! and friends straight from inline `onclick` attributes.  wasm-bindgen only
//! exports module functions, so at start-up we hang thin closures with those
//! names on `window` that forward into the page client.

use wasm_bindgen::prelude::*;

use crate::models::{ActionKind, ItemRef};

/// Coerce whatever the template passed (`7`, `"7"`) into an item id.
pub fn item_id(value: &JsValue) -> Option<u32> {
    if let Some(n) = value.as_f64() {
        return (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64)
            .then_some(n as u32);
    }
    value.as_string()?.trim().parse().ok()
}

const ACTIONS: [(&str, fn(u32) -> ItemRef, ActionKind); 8] = [
    ("likeTour", ItemRef::tour, ActionKind::Like),
    ("likeEvent", ItemRef::event, ActionKind::Like),
    ("bookmarkTour", ItemRef::tour, ActionKind::Bookmark),
    ("bookmarkEvent", ItemRef::event, ActionKind::Bookmark),
    ("addTourComment", ItemRef::tour, ActionKind::Comment),
    ("addEventComment", ItemRef::event, ActionKind::Comment),
    ("bookTour", ItemRef::tour, ActionKind::Book),
    ("bookEvent", ItemRef::event, ActionKind::Book),
];

pub fn install() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;

    for (name, make_item, action) in ACTIONS {
        let cb = Closure::<dyn Fn(JsValue)>::new(move |raw: JsValue| match item_id(&raw) {
            Some(id) => crate::dispatch(make_item(id), action),
            None => log::warn!("{}: invalid item id {:?}", name, raw),
        });
        js_sys::Reflect::set(&window, &JsValue::from_str(name), cb.as_ref())?;
        cb.forget();
    }

    let modal_fns: [(&str, fn(u32) -> Result<(), JsValue>); 2] = [
        ("openBookingModal", crate::open_booking_modal),
        ("closeBookingModal", crate::close_booking_modal),
    ];
    for (name, f) in modal_fns {
        let cb = Closure::<dyn Fn(JsValue)>::new(move |raw: JsValue| {
            let result = item_id(&raw)
                .ok_or_else(|| JsValue::from_str("invalid item id"))
                .and_then(f);
            if let Err(e) = result {
                log::warn!("{}({:?}): {:?}", name, raw, e);
            }
        });
        js_sys::Reflect::set(&window, &JsValue::from_str(name), cb.as_ref())?;
        cb.forget();
    }

    let notify = Closure::<dyn Fn(JsValue, JsValue)>::new(|message: JsValue, kind: JsValue| {
        let message = message.as_string().unwrap_or_else(|| format!("{:?}", message));
        crate::show_notification(&message, kind.as_string());
    });
    js_sys::Reflect::set(&window, &JsValue::from_str("showNotification"), notify.as_ref())?;
    notify.forget();

    let get_cookie = Closure::<dyn Fn(JsValue) -> JsValue>::new(|name: JsValue| {
        name.as_string()
            .and_then(|n| crate::get_cookie(&n))
            .map(JsValue::from)
            .unwrap_or(JsValue::NULL)
    });
    js_sys::Reflect::set(&window, &JsValue::from_str("getCookie"), get_cookie.as_ref())?;
    get_cookie.forget();

    Ok(())
}
