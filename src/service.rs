//! Prompt handling and deferred reply delivery
//!
//! `ChatService` ties the session store to the reply stub. Sending a prompt
//! appends the user message synchronously, then schedules a single deferred
//! task that fabricates the assistant reply after a fixed delay. The task
//! captures the id of the session that received the prompt and delivers the
//! reply to that session, so switching sessions while a reply is pending
//! cannot misdirect it. Delivery is fire-and-forget with no cancellation.

use crate::error::Result;
use crate::reply::ReplyStub;
use crate::session::{Role, SessionStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Simulated "thinking" latency before the assistant reply lands
pub const DEFAULT_REPLY_DELAY_MS: u64 = 450;

/// Chat service owning the store handle, the reply stub, and the delay
pub struct ChatService {
    store: Arc<Mutex<SessionStore>>,
    stub: Arc<Mutex<ReplyStub>>,
    reply_delay: Duration,
}

impl ChatService {
    /// Create a service over a shared store
    pub fn new(store: Arc<Mutex<SessionStore>>, stub: ReplyStub, reply_delay: Duration) -> Self {
        Self {
            store,
            stub: Arc::new(Mutex::new(stub)),
            reply_delay,
        }
    }

    /// Shared handle to the underlying store
    pub fn store(&self) -> Arc<Mutex<SessionStore>> {
        Arc::clone(&self.store)
    }

    /// Send a user prompt to the active session
    ///
    /// Trims the input; empty input is a no-op returning `None`. Otherwise
    /// the user message is appended and persisted immediately, and one
    /// deferred task is spawned to append the fabricated assistant reply
    /// after the configured delay. The returned join handle lets callers
    /// await delivery (the interactive loop does, to print the reply); the
    /// append happens whether or not the handle is awaited.
    pub async fn send_prompt(&self, raw: &str) -> Result<Option<JoinHandle<()>>> {
        let message = raw.trim();
        if message.is_empty() {
            return Ok(None);
        }
        let message = message.to_string();

        // Capture the target session before releasing the lock; the reply
        // must land here even if the active session changes meanwhile.
        let target_id = {
            let mut store = self.store.lock().await;
            let Some(id) = store.active_session_id().map(str::to_string) else {
                return Ok(None);
            };
            store.append_message(Role::User, &message)?;
            id
        };

        let store = Arc::clone(&self.store);
        let stub = Arc::clone(&self.stub);
        let delay = self.reply_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let reply = stub.lock().await.generate(&message);
            let mut store = store.lock().await;
            match store.append_message_to(&target_id, Role::Assistant, &reply) {
                Ok(true) => {}
                Ok(false) => {
                    tracing::warn!("Reply target session {} no longer exists", target_id)
                }
                Err(e) => tracing::warn!("Failed to deliver assistant reply: {}", e),
            }
        });

        Ok(Some(handle))
    }
}
