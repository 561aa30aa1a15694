//! Toast / notification helper.
//! Appends a fixed banner to `<body>`, slides it in, and removes it again once
//! the display time is over.  Every call is independent: concurrent toasts
//! simply stack, nothing is queued or de-duplicated.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element};

use crate::constants::{
    CLASS_OFFSCREEN, NOTIFICATION_DISPLAY_MS, NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_EXIT_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Map the loose strings JS callers pass (`'success'`, `'error'`, …).
    /// Unknown or missing values fall back to `Info`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("success") => ToastKind::Success,
            Some("error") => ToastKind::Error,
            Some("warning") => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-500",
            ToastKind::Error => "bg-red-500",
            ToastKind::Warning => "bg-yellow-500",
            ToastKind::Info => "bg-blue-500",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }
}

/// Where handlers send their user-facing messages.
pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind);
}

/// The real notifier: DOM toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        show(message, kind);
    }
}

/// Show a toast and return its element, or `None` when there is no document
/// to attach to.
pub fn show(message: &str, kind: ToastKind) -> Option<Element> {
    let document = web_sys::window()?.document()?;
    match build_and_attach(&document, message, kind) {
        Ok(el) => Some(el),
        Err(e) => {
            log::error!("failed to show notification: {:?}", e);
            None
        }
    }
}

fn build_and_attach(document: &Document, message: &str, kind: ToastKind) -> Result<Element, JsValue> {
    let toast = document.create_element("div")?;
    toast.set_class_name(&format!(
        "notification fixed top-4 right-4 z-50 p-4 rounded-lg shadow-lg transition-all \
         duration-300 transform {} {} text-white",
        CLASS_OFFSCREEN,
        kind.background()
    ));
    toast.set_attribute("role", "status")?;

    let row = document.create_element("div")?;
    row.set_class_name("flex items-center gap-2");

    let icon = document.create_element("span")?;
    icon.set_class_name("text-lg");
    icon.set_text_content(Some(kind.icon()));

    // Message goes in as text, never as markup.
    let text = document.create_element("span")?;
    text.set_text_content(Some(message));

    row.append_child(&icon)?;
    row.append_child(&text)?;
    toast.append_child(&row)?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    body.append_child(&toast)?;

    // Early dismissal on click.
    {
        let target = toast.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || dismiss(&target));
        toast.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Slide in.
    {
        let target = toast.clone();
        Timeout::new(NOTIFICATION_ENTER_DELAY_MS, move || {
            let _ = target.class_list().remove_1(CLASS_OFFSCREEN);
        })
        .forget();
    }

    // Slide out, then detach.
    {
        let target = toast.clone();
        Timeout::new(NOTIFICATION_DISPLAY_MS, move || dismiss(&target)).forget();
    }

    Ok(toast)
}

/// Start the exit animation and detach the element once it finishes.
/// Calling this twice is harmless; removing a detached node is a no-op.
fn dismiss(toast: &Element) {
    let _ = toast.class_list().add_1(CLASS_OFFSCREEN);
    let target = toast.clone();
    Timeout::new(NOTIFICATION_EXIT_MS, move || target.remove()).forget();
}
