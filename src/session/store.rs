//! The session store: single source of truth for chat state
//!
//! Owns the ordered session collection, the active-session selection, and
//! the selected model label. Every mutating operation persists through the
//! storage backend before returning, and keeps the collection sorted most
//! recently active first. This is the explicit state container the rest of
//! the application mutates through named entry points; presentation code
//! only ever reads snapshots of it.

use crate::error::Result;
use crate::session::types::{Message, Role, Session};
use crate::storage::SledStorage;
use chrono::Utc;

/// Session store over a storage backend
///
/// Invariant: whenever `sessions` is non-empty, `active_session_id` refers
/// to an existing session. `load_sessions` and `create_session` both
/// establish this, and no operation removes a session.
pub struct SessionStore {
    sessions: Vec<Session>,
    active_session_id: Option<String>,
    selected_model: String,
    storage: SledStorage,
}

impl SessionStore {
    /// Open a store and initialize it from persisted state
    ///
    /// Loads the model label (falling back to `default_model` when absent)
    /// and the session list. Guarantees at least one session exists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use parley::session::SessionStore;
    /// use parley::storage::SledStorage;
    ///
    /// # fn main() -> parley::error::Result<()> {
    /// let storage = SledStorage::open("/tmp/parley-store")?;
    /// let store = SessionStore::open(storage, "ChatGPT 4.1")?;
    /// assert!(store.active_session().is_some());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(storage: SledStorage, default_model: &str) -> Result<Self> {
        let selected_model = storage
            .load_model()?
            .unwrap_or_else(|| default_model.to_string());

        let mut store = Self {
            sessions: Vec::new(),
            active_session_id: None,
            selected_model,
            storage,
        };
        store.load_sessions()?;
        Ok(store)
    }

    /// Load the session list from storage
    ///
    /// Missing or malformed data degrades silently to an empty collection;
    /// an empty collection is immediately repaired by creating one fresh
    /// session, so the store never starts without an active session. On a
    /// successful load the first (most recently updated) session becomes
    /// active.
    pub fn load_sessions(&mut self) -> Result<()> {
        self.sessions = self.storage.load_sessions()?.unwrap_or_default();

        if self.sessions.is_empty() {
            self.create_session()?;
            return Ok(());
        }

        self.active_session_id = Some(self.sessions[0].id.clone());
        Ok(())
    }

    /// Create a new empty session and make it active
    ///
    /// The session is inserted at the front of the collection and the
    /// updated list is persisted. Returns the new session's id.
    pub fn create_session(&mut self) -> Result<String> {
        let session = Session::new();
        let id = session.id.clone();

        self.sessions.insert(0, session);
        self.active_session_id = Some(id.clone());
        self.persist()?;

        Ok(id)
    }

    /// The session currently selected for display and appends
    pub fn active_session(&self) -> Option<&Session> {
        let id = self.active_session_id.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Resolve a session by full id or unique id prefix
    ///
    /// Ambiguous prefixes resolve to nothing rather than picking an
    /// arbitrary match.
    pub fn resolve_session(&self, reference: &str) -> Option<&Session> {
        find_session(&self.sessions, reference)
    }

    /// Make the referenced session active
    ///
    /// Accepts a full id or unique prefix. Returns the activated session's
    /// id, or `None` (leaving the selection unchanged) when the reference
    /// does not resolve.
    pub fn select_session(&mut self, reference: &str) -> Option<String> {
        let id = self.resolve_session(reference)?.id.clone();
        self.active_session_id = Some(id.clone());
        Some(id)
    }

    /// Append a message to the active session
    ///
    /// No-op (returning `false`) when no session is active.
    pub fn append_message(&mut self, role: Role, content: &str) -> Result<bool> {
        let Some(id) = self.active_session_id.clone() else {
            return Ok(false);
        };
        self.append_message_to(&id, role, content)
    }

    /// Append a message to an explicit session
    ///
    /// Used by deferred reply delivery, which targets the session captured
    /// when the prompt was sent rather than whatever is active at fire
    /// time. Bumps the session's `updated_at`, derives the title from the
    /// first user message, re-sorts the collection most recent first, and
    /// persists. Returns `false` when the session id is unknown.
    pub fn append_message_to(&mut self, session_id: &str, role: Role, content: &str) -> Result<bool> {
        let Some(index) = self.sessions.iter().position(|s| s.id == session_id) else {
            return Ok(false);
        };

        let session = &mut self.sessions[index];
        session.messages.push(Message::new(role, content));
        session.updated_at = Utc::now();

        if role == Role::User {
            session.assign_title(content);
        }

        self.sessions
            .sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        self.persist()?;

        Ok(true)
    }

    /// Overwrite the selected model label and persist it
    ///
    /// The label is free-form and stored under its own key, independent of
    /// the session data.
    pub fn set_selected_model(&mut self, label: &str) -> Result<()> {
        self.selected_model = label.to_string();
        self.storage.save_model(label)
    }

    /// All sessions, most recently active first
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// The currently selected model label
    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    /// Id of the active session, if any
    pub fn active_session_id(&self) -> Option<&str> {
        self.active_session_id.as_deref()
    }

    fn persist(&self) -> Result<()> {
        self.storage.save_sessions(&self.sessions)
    }
}

/// Find a session by full id or unique id prefix
///
/// Shared by the store and by read-only projections over a loaded session
/// list. Ambiguous prefixes match nothing.
pub fn find_session<'a>(sessions: &'a [Session], reference: &str) -> Option<&'a Session> {
    if let Some(session) = sessions.iter().find(|s| s.id == reference) {
        return Some(session);
    }

    let mut matches = sessions.iter().filter(|s| s.id.starts_with(reference));
    match (matches.next(), matches.next()) {
        (Some(session), None) => Some(session),
        _ => None,
    }
}
