//! Parley - Offline chat console library
//!
//! This library provides the core functionality for the Parley chat
//! console: session state management, embedded persistence, canned reply
//! generation, and configuration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: the session store and its persisted record types
//! - `storage`: embedded key-value persistence for sessions and the model
//!   selection
//! - `reply`: the canned-reply generator standing in for a real backend
//! - `service`: prompt handling and deferred reply delivery
//! - `render`: terminal projections of store state
//! - `commands`: CLI command handlers
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use parley::session::SessionStore;
//! use parley::storage::SledStorage;
//!
//! fn main() -> anyhow::Result<()> {
//!     let storage = SledStorage::open("/tmp/parley-store")?;
//!     let store = SessionStore::open(storage, "ChatGPT 4.1")?;
//!     assert!(store.active_session().is_some());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod reply;
pub mod service;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{ParleyError, Result};
pub use reply::ReplyStub;
pub use service::ChatService;
pub use session::{Message, Role, Session, SessionStore};
pub use storage::SledStorage;
