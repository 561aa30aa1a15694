//! Comment form and comment list.
//!
//! Server-supplied author, timestamp and body are written as text nodes, so
//! markup coming back from the server is displayed literally instead of
//! being interpreted.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{require, require_text_field, TextField};
use crate::errors::InteractionError;
use crate::models::{CommentReply, ItemKind, ItemRef};

use super::slot_id;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const USER_ICON_PATH: &str = "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-6-3a2 2 0 11-4 0 2 2 0 014 0zm-2 4a5 5 0 00-4.546 2.916A5.986 5.986 0 0010 16a5.986 5.986 0 004.546-2.084A5 5 0 0010 11z";

/// Slots: `{kind}-comment-input-{id}` (required), `{kind}-comment-submit-{id}`
/// (optional, disabled while the request is pending).
#[derive(Debug, Clone)]
pub struct CommentFormView {
    pub input: TextField,
    pub submit: Option<Element>,
}

impl CommentFormView {
    pub fn bind(document: &Document, item: ItemRef) -> Result<Self, InteractionError> {
        Ok(Self {
            input: require_text_field(document, &slot_id(item, "comment-input"))?,
            submit: document.get_element_by_id(&slot_id(item, "comment-submit")),
        })
    }

    /// Input text with surrounding whitespace (BOM included) removed.
    pub fn content(&self) -> String {
        self.input
            .value()
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .to_string()
    }

    pub fn clear(&self) {
        self.input.set_value("");
    }
}

/// Slot: `{kind}-comments-{id}`.
#[derive(Debug, Clone)]
pub struct CommentListView {
    pub container: Element,
    kind: ItemKind,
}

impl CommentListView {
    pub fn bind(document: &Document, item: ItemRef) -> Result<Self, InteractionError> {
        Ok(Self {
            container: require(document, &slot_id(item, "comments"))?,
            kind: item.kind,
        })
    }

    /// Render `reply` and insert it above every existing comment.
    pub fn prepend(&self, document: &Document, reply: &CommentReply) -> Result<Element, JsValue> {
        let block = render_comment(document, self.kind, reply)?;
        self.container.prepend_with_node_1(&block)?;
        Ok(block)
    }
}

fn accent(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Tour => "emerald",
        ItemKind::Event => "blue",
    }
}

fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let e = document.create_element(tag)?;
    e.set_class_name(class);
    Ok(e)
}

pub fn render_comment(
    document: &Document,
    kind: ItemKind,
    reply: &CommentReply,
) -> Result<Element, JsValue> {
    let accent = accent(kind);

    let card = el(document, "div", "comment bg-gray-50 rounded-lg p-4 mb-4")?;
    if let Some(id) = reply.comment_id {
        card.set_attribute("data-comment-id", &id.to_string())?;
    }

    let header = el(document, "div", "flex items-start justify-between mb-2")?;
    let who = el(document, "div", "flex items-center gap-2")?;

    let avatar = el(
        document,
        "div",
        &format!("w-8 h-8 bg-{}-100 rounded-full flex items-center justify-center", accent),
    )?;
    let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
    svg.set_attribute("class", &format!("w-4 h-4 text-{}-600", accent))?;
    svg.set_attribute("fill", "currentColor")?;
    svg.set_attribute("viewBox", "0 0 20 20")?;
    let path = document.create_element_ns(Some(SVG_NS), "path")?;
    path.set_attribute("fill-rule", "evenodd")?;
    path.set_attribute("clip-rule", "evenodd")?;
    path.set_attribute("d", USER_ICON_PATH)?;
    svg.append_child(&path)?;
    avatar.append_child(&svg)?;

    let author = el(document, "span", "comment-author font-semibold text-gray-800")?;
    author.set_text_content(Some(&reply.user_email));
    who.append_child(&avatar)?;
    who.append_child(&author)?;

    let timestamp = el(document, "span", "comment-date text-sm text-gray-500")?;
    timestamp.set_text_content(Some(&reply.created_at));

    header.append_child(&who)?;
    header.append_child(&timestamp)?;

    let body = el(document, "p", "comment-content text-gray-700")?;
    body.set_text_content(Some(&reply.content));

    card.append_child(&header)?;
    card.append_child(&body)?;
    Ok(card)
}
