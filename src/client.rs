//! The interaction client: like, bookmark, comment and booking dispatchers.
//!
//! Every action follows the same shape: check the session, bind the views it
//! needs, validate local input, claim the in-flight key, POST, decode, patch
//! the DOM.  Failures never escape to the page; [`InteractionClient::report`]
//! turns each one into a notification or a log line and the result is only
//! returned so callers (and tests) can see what happened.

use std::cell::{Cell, RefCell};

use web_sys::Document;

use crate::components::BookingModal;
use crate::constants::{
    CSRF_COOKIE_NAME, MSG_BOOKING_FAILED, MSG_COMMENT_FAILED, MSG_COMMENT_POSTED,
    MSG_EMPTY_COMMENT, MSG_REQUEST_FAILED,
};
use crate::cookies::document_cookie;
use crate::dom_utils;
use crate::errors::InteractionError;
use crate::in_flight::{InFlightRegistry, InFlightTicket};
use crate::models::{
    decode_reply, ActionKind, BookingReply, BookmarkReply, CommentReply, ItemRef, LikeReply,
    RequestBody,
};
use crate::network::{ApiConfig, HttpRequest, Transport};
use crate::session::Session;
use crate::toast::{Notifier, ToastKind};
use crate::views::{BookingFormView, CommentFormView, CommentListView, ToggleView};

pub struct InteractionClient<T: Transport, N: Notifier> {
    session: Cell<Session>,
    config: RefCell<ApiConfig>,
    transport: T,
    notifier: N,
    in_flight: InFlightRegistry,
}

impl<T: Transport, N: Notifier> InteractionClient<T, N> {
    pub fn new(session: Session, config: ApiConfig, transport: T, notifier: N) -> Self {
        Self {
            session: Cell::new(session),
            config: RefCell::new(config),
            transport,
            notifier,
            in_flight: InFlightRegistry::new(),
        }
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn set_session(&self, session: Session) {
        self.session.set(session);
    }

    pub fn set_config(&self, config: ApiConfig) {
        *self.config.borrow_mut() = config;
    }

    pub fn in_flight(&self) -> &InFlightRegistry {
        &self.in_flight
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run `action` on `item` and report the outcome.
    pub async fn perform(&self, item: ItemRef, action: ActionKind) -> Result<(), InteractionError> {
        let result = match action {
            ActionKind::Like | ActionKind::Bookmark => self.run_toggle(item, action).await,
            ActionKind::Comment => self.run_comment(item).await,
            ActionKind::Book => self.run_booking(item).await,
        };
        self.report(item, action, &result);
        result
    }

    pub async fn like(&self, item: ItemRef) -> Result<(), InteractionError> {
        self.perform(item, ActionKind::Like).await
    }

    pub async fn bookmark(&self, item: ItemRef) -> Result<(), InteractionError> {
        self.perform(item, ActionKind::Bookmark).await
    }

    pub async fn comment(&self, item: ItemRef) -> Result<(), InteractionError> {
        self.perform(item, ActionKind::Comment).await
    }

    pub async fn book(&self, item: ItemRef) -> Result<(), InteractionError> {
        self.perform(item, ActionKind::Book).await
    }

    // -------------------------------------------------------------------
    // Action bodies
    // -------------------------------------------------------------------

    async fn run_toggle(&self, item: ItemRef, action: ActionKind) -> Result<(), InteractionError> {
        self.require_session()?;
        let document = page_document()?;
        let view = match action {
            ActionKind::Like => ToggleView::bind_like(&document, item)?,
            _ => ToggleView::bind_bookmark(&document, item)?,
        };
        let _ticket = self.claim(item, action, Some(view.button.clone()))?;

        let body = self.send(item, action, RequestBody::Empty).await?;
        let (active, total) = match action {
            ActionKind::Like => {
                let reply: LikeReply = decode_reply(&body)?;
                (reply.liked, reply.total_likes)
            }
            _ => {
                let reply: BookmarkReply = decode_reply(&body)?;
                (reply.bookmarked, reply.total_bookmarks)
            }
        };
        view.apply(active, total);
        Ok(())
    }

    async fn run_comment(&self, item: ItemRef) -> Result<(), InteractionError> {
        self.require_session()?;
        let document = page_document()?;
        let form = CommentFormView::bind(&document, item)?;
        let content = form.content();
        if content.is_empty() {
            return Err(InteractionError::InvalidInput(MSG_EMPTY_COMMENT));
        }
        let _ticket = self.claim(item, ActionKind::Comment, form.submit.clone())?;

        let fields = vec![("content".to_string(), content)];
        let body = self.send(item, ActionKind::Comment, RequestBody::Form(fields)).await?;
        let reply: CommentReply = decode_reply(&body)?;
        if !reply.success {
            log::debug!("comment reply for {} {} without success flag, ignored", item.kind, item.id);
            return Ok(());
        }

        form.clear();
        match CommentListView::bind(&document, item) {
            Ok(list) => {
                if let Err(e) = list.prepend(&document, &reply) {
                    log::warn!("failed to render comment: {:?}", e);
                }
            }
            Err(e) => log::warn!("comment posted but list not rendered: {}", e),
        }
        self.notifier.notify(MSG_COMMENT_POSTED, ToastKind::Success);
        Ok(())
    }

    async fn run_booking(&self, item: ItemRef) -> Result<(), InteractionError> {
        self.require_session()?;
        let document = page_document()?;
        let form = BookingFormView::bind(&document, item)?;
        let payload = form.payload()?;
        let _ticket = self.claim(item, ActionKind::Book, form.submit.clone())?;

        let json = serde_json::to_value(&payload)?;
        let body = self.send(item, ActionKind::Book, RequestBody::Json(json)).await?;
        let reply: BookingReply = decode_reply(&body)?;

        if let Some(id) = reply.booking_id {
            log::info!("booking {} created for {} {}", id, item.kind, item.id);
        }
        if !reply.message.is_empty() {
            self.notifier.notify(&reply.message, ToastKind::Success);
        }
        match BookingModal::bind(&document, item.id) {
            Ok(modal) => modal.hide(),
            Err(e) => log::warn!("booking done but modal not closed: {}", e),
        }
        Ok(())
    }

    // -------------------------------------------------------------------
    // Plumbing
    // -------------------------------------------------------------------

    fn require_session(&self) -> Result<(), InteractionError> {
        if self.session.get().is_authenticated {
            Ok(())
        } else {
            Err(InteractionError::NotAuthenticated)
        }
    }

    fn claim(
        &self,
        item: ItemRef,
        action: ActionKind,
        control: Option<web_sys::Element>,
    ) -> Result<InFlightTicket, InteractionError> {
        self.in_flight
            .try_acquire((item, action), control)
            .ok_or(InteractionError::Duplicate)
    }

    async fn send(
        &self,
        item: ItemRef,
        action: ActionKind,
        body: RequestBody,
    ) -> Result<String, InteractionError> {
        let request = HttpRequest {
            url: self.config.borrow().action_url(item, action),
            body,
            csrf_token: document_cookie(CSRF_COOKIE_NAME),
        };
        if request.csrf_token.is_none() {
            log::warn!("no {} cookie; the server will likely reject {}", CSRF_COOKIE_NAME, request.url);
        }
        log::debug!("POST {}", request.url);
        self.transport.post(&request).await
    }

    /// Surface an outcome to the user.  Only preconditions, server errors and
    /// transport failures are user-visible; the rest goes to the console.
    fn report(&self, item: ItemRef, action: ActionKind, result: &Result<(), InteractionError>) {
        let err = match result {
            Ok(()) => return,
            Err(e) => e,
        };
        match err {
            e if e.is_precondition() => self.notifier.notify(&e.to_string(), ToastKind::Warning),
            InteractionError::Server(message) => self.notifier.notify(message, ToastKind::Error),
            e if e.is_transport() => {
                log::error!("{} {} {} failed: {}", action.as_str(), item.kind, item.id, e);
                self.notifier.notify(failure_message(action), ToastKind::Error);
            }
            InteractionError::MissingSlot(_) => {
                log::warn!("{} {} {} skipped: {}", action.as_str(), item.kind, item.id, err)
            }
            _ => log::debug!("{} {} {} ignored: {}", action.as_str(), item.kind, item.id, err),
        }
    }
}

/// Generic text shown when a request fails without a server message.
pub fn failure_message(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Like | ActionKind::Bookmark => MSG_REQUEST_FAILED,
        ActionKind::Comment => MSG_COMMENT_FAILED,
        ActionKind::Book => MSG_BOOKING_FAILED,
    }
}

fn page_document() -> Result<Document, InteractionError> {
    dom_utils::document().ok_or_else(|| InteractionError::MissingSlot("document".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn generic_failure_texts() {
        assert_eq!(failure_message(ActionKind::Like), MSG_REQUEST_FAILED);
        assert_eq!(failure_message(ActionKind::Bookmark), MSG_REQUEST_FAILED);
        assert_eq!(failure_message(ActionKind::Comment), MSG_COMMENT_FAILED);
        assert_eq!(failure_message(ActionKind::Book), MSG_BOOKING_FAILED);
    }
}
