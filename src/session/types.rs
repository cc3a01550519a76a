//! Session and message records
//!
//! Defines the persisted data model: a [`Session`] is one conversation
//! thread holding an ordered, append-only list of [`Message`]s, plus the
//! metadata used for ordering and display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to a session before its first user message arrives.
pub const DEFAULT_TITLE: &str = "New chat";

/// Maximum number of characters kept when deriving a title from a prompt.
pub const TITLE_MAX_CHARS: usize = 36;

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message typed by the user
    User,
    /// A fabricated assistant reply
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One turn in a conversation
///
/// Messages are immutable once created; the store only ever appends them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for the message
    pub id: String,
    /// Who produced the message
    pub role: Role,
    /// Message text
    pub content: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a new message with a fresh id and the current timestamp
    ///
    /// # Examples
    ///
    /// ```
    /// use parley::session::{Message, Role};
    ///
    /// let msg = Message::new(Role::User, "Hello");
    /// assert_eq!(msg.role, Role::User);
    /// assert_eq!(msg.content, "Hello");
    /// ```
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// One conversation thread with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for the session, generated at creation, never reused
    pub id: String,
    /// User-friendly title, derived from the first user message
    pub title: String,
    /// When the session was created
    pub created_at: DateTime<Utc>,
    /// When the session last received a message
    pub updated_at: DateTime<Utc>,
    /// Ordered message history
    pub messages: Vec<Message>,
}

impl Session {
    /// Creates a new empty session with the default title
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title: DEFAULT_TITLE.to_string(),
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
        }
    }

    /// Derive the title from the first user prompt
    ///
    /// Only takes effect while the title is still the default sentinel, so
    /// the title is assigned exactly once per session. Long prompts are
    /// truncated to [`TITLE_MAX_CHARS`] characters with a `...` marker.
    /// Truncation counts characters, not bytes, so multi-byte input is safe.
    ///
    /// # Examples
    ///
    /// ```
    /// use parley::session::Session;
    ///
    /// let mut session = Session::new();
    /// session.assign_title("Explain lifetimes");
    /// assert_eq!(session.title, "Explain lifetimes");
    ///
    /// session.assign_title("Something else entirely");
    /// assert_eq!(session.title, "Explain lifetimes");
    /// ```
    pub fn assign_title(&mut self, first_prompt: &str) {
        if self.title != DEFAULT_TITLE {
            return;
        }

        let mut title: String = first_prompt.chars().take(TITLE_MAX_CHARS).collect();
        if first_prompt.chars().count() > TITLE_MAX_CHARS {
            title.push_str("...");
        }
        self.title = title;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a new unique identifier
///
/// Session and message ids are v4 UUIDs; they are unique per generation and
/// never reused.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_unique() {
        let id1 = new_id();
        let id2 = new_id();
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID string length
    }

    #[test]
    fn test_message_new_sets_fields() {
        let msg = Message::new(Role::Assistant, "reply text");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "reply text");
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_session_new_has_default_title_and_no_messages() {
        let session = Session::new();
        assert_eq!(session.title, DEFAULT_TITLE);
        assert!(session.messages.is_empty());
        assert_eq!(session.created_at, session.updated_at);
    }

    #[test]
    fn test_assign_title_short_prompt_kept_verbatim() {
        let mut session = Session::new();
        session.assign_title("Hello");
        assert_eq!(session.title, "Hello");
    }

    #[test]
    fn test_assign_title_truncates_long_prompt() {
        let mut session = Session::new();
        let prompt = "a".repeat(50);
        session.assign_title(&prompt);
        assert_eq!(session.title, format!("{}...", "a".repeat(36)));
    }

    #[test]
    fn test_assign_title_exactly_36_chars_no_marker() {
        let mut session = Session::new();
        let prompt = "b".repeat(36);
        session.assign_title(&prompt);
        assert_eq!(session.title, prompt);
        assert!(!session.title.ends_with("..."));
    }

    #[test]
    fn test_assign_title_only_once() {
        let mut session = Session::new();
        session.assign_title("first prompt");
        session.assign_title("second prompt");
        assert_eq!(session.title, "first prompt");
    }

    #[test]
    fn test_assign_title_counts_chars_not_bytes() {
        let mut session = Session::new();
        let prompt = "é".repeat(40);
        session.assign_title(&prompt);
        assert_eq!(session.title, format!("{}...", "é".repeat(36)));
    }

    #[test]
    fn test_session_serde_roundtrip() {
        let mut session = Session::new();
        session.messages.push(Message::new(Role::User, "hi"));
        session.messages.push(Message::new(Role::Assistant, "hello"));

        let json = serde_json::to_string(&session).expect("serialize failed");
        let back: Session = serde_json::from_str(&json).expect("deserialize failed");

        assert_eq!(back.id, session.id);
        assert_eq!(back.title, session.title);
        assert_eq!(back.created_at, session.created_at);
        assert_eq!(back.updated_at, session.updated_at);
        assert_eq!(back.messages.len(), 2);
        assert_eq!(back.messages[0].role, Role::User);
        assert_eq!(back.messages[1].role, Role::Assistant);
    }
}
