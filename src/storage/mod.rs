//! Session persistence backed by an embedded key-value store
//!
//! All durable state lives in a single `sled` database under two fixed,
//! independent keys: the full ordered session list (one JSON array) and the
//! selected model label (one UTF-8 string). There is no incremental write
//! and no migration logic; a value that fails to decode is treated as
//! absent so callers can fall back to a fresh state.

use crate::error::{ParleyError, Result};
use crate::session::Session;
use directories::ProjectDirs;
use sled::Db;
use std::path::PathBuf;

/// Key holding the JSON-serialized session list
const SESSIONS_KEY: &[u8] = b"sessions";

/// Key holding the selected model label
const MODEL_KEY: &[u8] = b"selected_model";

/// Environment variable overriding the store location
pub const STORE_PATH_ENV: &str = "PARLEY_STORE_PATH";

/// Storage backend for sessions and the model selection
pub struct SledStorage {
    db: Db,
}

impl SledStorage {
    /// Open the store at its default location
    ///
    /// Honors the `PARLEY_STORE_PATH` environment variable when set; this
    /// makes it easy to point the binary at a test store or an alternate
    /// directory without changing the user's application data dir.
    pub fn open_default() -> Result<Self> {
        if let Ok(override_path) = std::env::var(STORE_PATH_ENV) {
            return Self::open(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "parley", "parley")
            .ok_or_else(|| ParleyError::Storage("Could not determine data directory".into()))?;

        Self::open(proj_dirs.data_dir().join("store"))
    }

    /// Open or create a store at the given directory
    ///
    /// This is primarily useful for tests where the default application
    /// data directory is not desirable (for example, a temporary directory).
    ///
    /// # Errors
    ///
    /// Returns `ParleyError::Storage` if the database cannot be opened.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use parley::storage::SledStorage;
    ///
    /// let storage = SledStorage::open("/tmp/parley-store").unwrap();
    /// ```
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ParleyError::Storage(format!("Failed to create store dir: {}", e)))?;
        }

        let db = sled::open(&path)
            .map_err(|e| ParleyError::Storage(format!("Failed to open database: {}", e)))?;
        Ok(Self { db })
    }

    /// Load the persisted session list
    ///
    /// Returns `Ok(None)` when the key is missing or its value does not
    /// decode as a session array. Malformed data is logged and otherwise
    /// treated the same as missing data, so the caller starts fresh instead
    /// of surfacing an error to the user.
    pub fn load_sessions(&self) -> Result<Option<Vec<Session>>> {
        let bytes = match self
            .db
            .get(SESSIONS_KEY)
            .map_err(|e| ParleyError::Storage(format!("Get failed: {}", e)))?
        {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        match serde_json::from_slice::<Vec<Session>>(&bytes) {
            Ok(sessions) => Ok(Some(sessions)),
            Err(e) => {
                tracing::warn!("Discarding malformed session data: {}", e);
                Ok(None)
            }
        }
    }

    /// Persist the full session list as one value
    pub fn save_sessions(&self, sessions: &[Session]) -> Result<()> {
        let value = serde_json::to_vec(sessions)
            .map_err(|e| ParleyError::Storage(format!("Serialization failed: {}", e)))?;

        self.db
            .insert(SESSIONS_KEY, value)
            .map_err(|e| ParleyError::Storage(format!("Insert failed: {}", e)))?;

        self.db
            .flush()
            .map_err(|e| ParleyError::Storage(format!("Flush failed: {}", e)))?;

        Ok(())
    }

    /// Load the persisted model label
    ///
    /// Returns `Ok(None)` when the key is missing or not valid UTF-8.
    pub fn load_model(&self) -> Result<Option<String>> {
        let bytes = match self
            .db
            .get(MODEL_KEY)
            .map_err(|e| ParleyError::Storage(format!("Get failed: {}", e)))?
        {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        match String::from_utf8(bytes.to_vec()) {
            Ok(label) => Ok(Some(label)),
            Err(e) => {
                tracing::warn!("Discarding malformed model label: {}", e);
                Ok(None)
            }
        }
    }

    /// Persist the model label under its own key
    pub fn save_model(&self, label: &str) -> Result<()> {
        self.db
            .insert(MODEL_KEY, label.as_bytes())
            .map_err(|e| ParleyError::Storage(format!("Insert failed: {}", e)))?;

        self.db
            .flush()
            .map_err(|e| ParleyError::Storage(format!("Flush failed: {}", e)))?;

        Ok(())
    }

    /// Overwrite the raw bytes of the sessions key
    ///
    /// Test hook for simulating corrupted persisted state.
    #[doc(hidden)]
    pub fn put_raw_sessions(&self, bytes: &[u8]) -> Result<()> {
        self.db
            .insert(SESSIONS_KEY, bytes)
            .map_err(|e| ParleyError::Storage(format!("Insert failed: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| ParleyError::Storage(format!("Flush failed: {}", e)))?;
        Ok(())
    }

}
