use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod client;
pub mod components;
pub mod constants;
pub mod cookies;
pub mod dom_utils;
pub mod errors;
pub mod globals;
pub mod in_flight;
pub mod models;
pub mod network;
pub mod session;
pub mod toast;
pub mod views;

use client::InteractionClient;
use models::{ActionKind, ItemRef};
use network::{ApiConfig, FetchTransport};
use session::Session;
use toast::{ToastKind, ToastNotifier};

/// The client wired to the browser: `fetch` for requests, DOM toasts for
/// feedback.
pub type PageClient = InteractionClient<FetchTransport, ToastNotifier>;

thread_local! {
    static PAGE_CLIENT: RefCell<Option<Rc<PageClient>>> = const { RefCell::new(None) };
}

/// The page-wide client, created on first use when `start()` has not run.
fn page_client() -> Rc<PageClient> {
    PAGE_CLIENT.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| {
                Rc::new(PageClient::new(
                    Session::from_window(),
                    ApiConfig::from_env(),
                    FetchTransport,
                    ToastNotifier,
                ))
            })
            .clone()
    })
}

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A second init (e.g. module re-instantiated) only fails on the logger.
    let _ = console_log::init_with_level(level);

    let client = page_client();
    globals::install()?;

    log::info!(
        "listing interactions ready (authenticated: {})",
        client.session().is_authenticated
    );
    Ok(())
}

/// Fire-and-forget dispatch used by every exported action.
pub(crate) fn dispatch(item: ItemRef, action: ActionKind) {
    let client = page_client();
    spawn_local(async move {
        // Outcomes are already reported to the user by the client.
        let _ = client.perform(item, action).await;
    });
}

// ---------------------------------------------------------------------------
// Exported API
// ---------------------------------------------------------------------------

#[wasm_bindgen]
pub fn like_tour(tour_id: u32) {
    dispatch(ItemRef::tour(tour_id), ActionKind::Like);
}

#[wasm_bindgen]
pub fn like_event(event_id: u32) {
    dispatch(ItemRef::event(event_id), ActionKind::Like);
}

#[wasm_bindgen]
pub fn bookmark_tour(tour_id: u32) {
    dispatch(ItemRef::tour(tour_id), ActionKind::Bookmark);
}

#[wasm_bindgen]
pub fn bookmark_event(event_id: u32) {
    dispatch(ItemRef::event(event_id), ActionKind::Bookmark);
}

#[wasm_bindgen]
pub fn add_tour_comment(tour_id: u32) {
    dispatch(ItemRef::tour(tour_id), ActionKind::Comment);
}

#[wasm_bindgen]
pub fn add_event_comment(event_id: u32) {
    dispatch(ItemRef::event(event_id), ActionKind::Comment);
}

#[wasm_bindgen]
pub fn book_tour(tour_id: u32) {
    dispatch(ItemRef::tour(tour_id), ActionKind::Book);
}

#[wasm_bindgen]
pub fn book_event(event_id: u32) {
    dispatch(ItemRef::event(event_id), ActionKind::Book);
}

#[wasm_bindgen]
pub fn open_booking_modal(item_id: u32) -> Result<(), JsValue> {
    let document = dom_utils::document().ok_or_else(|| JsValue::from_str("no document"))?;
    components::open_booking_modal(&document, item_id)?;
    Ok(())
}

#[wasm_bindgen]
pub fn close_booking_modal(item_id: u32) -> Result<(), JsValue> {
    let document = dom_utils::document().ok_or_else(|| JsValue::from_str("no document"))?;
    components::close_booking_modal(&document, item_id)?;
    Ok(())
}

/// `kind` is one of `success`, `error`, `warning`, `info`; anything else is
/// treated as `info`.
#[wasm_bindgen]
pub fn show_notification(message: &str, kind: Option<String>) {
    toast::show(message, ToastKind::from_name(kind.as_deref()));
}

#[wasm_bindgen]
pub fn get_cookie(name: &str) -> Option<String> {
    cookies::document_cookie(name)
}

/// For pages that learn the login state after the module has loaded.
#[wasm_bindgen]
pub fn set_authenticated(is_authenticated: bool) {
    page_client().set_session(Session::new(is_authenticated));
}

/// Point requests at another origin at runtime.
#[wasm_bindgen]
pub fn init_api_config_js(base_url: &str) {
    page_client().set_config(ApiConfig::from_url(base_url));
}
