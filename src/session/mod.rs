//! Session state management
//!
//! - `types`: the persisted `Session`/`Message` records
//! - `store`: the `SessionStore` container enforcing persistence and
//!   ordering invariants

pub mod store;
pub mod types;

pub use store::{find_session, SessionStore};
pub use types::{new_id, Message, Role, Session, DEFAULT_TITLE, TITLE_MAX_CHARS};
