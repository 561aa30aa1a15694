use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::InteractionError;

/// The two listing types likes, bookmarks, comments and bookings attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Tour,
    Event,
}

impl ItemKind {
    /// Segment used both in endpoint paths and in element ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Tour => "tour",
            ItemKind::Event => "event",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub id: u32,
}

impl ItemRef {
    pub fn tour(id: u32) -> Self {
        Self { kind: ItemKind::Tour, id }
    }

    pub fn event(id: u32) -> Self {
        Self { kind: ItemKind::Event, id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Like,
    Bookmark,
    Comment,
    Book,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Like => "like",
            ActionKind::Bookmark => "bookmark",
            ActionKind::Comment => "comment",
            ActionKind::Book => "book",
        }
    }
}

/// Body of an outgoing action request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No payload, but still announced as JSON like every non-form action.
    Empty,
    /// Multipart form fields; the browser picks the content type.
    Form(Vec<(String, String)>),
    Json(Value),
}

impl RequestBody {
    pub fn is_form(&self) -> bool {
        matches!(self, RequestBody::Form(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingPayload {
    pub participants: u32,
    pub special_requests: String,
}

// ---------------------------------------------------------------------------
// Server replies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LikeReply {
    pub liked: bool,
    pub total_likes: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookmarkReply {
    pub bookmarked: bool,
    pub total_bookmarks: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommentReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub comment_id: Option<u64>,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingReply {
    #[serde(default)]
    pub booking_id: Option<u64>,
    #[serde(default)]
    pub message: String,
}

/// Decode a reply body.  A truthy `error` field wins over everything else and
/// comes back as [`InteractionError::Server`] with the message verbatim.
pub fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<T, InteractionError> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(err) = value.get("error") {
        let message = match err {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        };
        if let Some(message) = message {
            if let Some(form_errors) = value.get("form_errors") {
                log::debug!("server form errors: {}", form_errors);
            }
            return Err(InteractionError::Server(message));
        }
    }

    Ok(serde_json::from_value(value)?)
}
