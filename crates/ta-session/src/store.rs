//! `SessionStore` — persistence seam for [`PersistedSession`].
//!
//! Implementations must be cheap to call from a UI event handler; the
//! session is a few hundred bytes at most.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{PersistedSession, SessionResult};

pub trait SessionStore {
    /// The stored session, or the default (logged-out) one if nothing has
    /// been saved yet.
    fn load(&self) -> SessionResult<PersistedSession>;

    fn save(&self, session: &PersistedSession) -> SessionResult<()>;

    /// Remove any stored session.  Clearing an empty store is not an error.
    fn clear(&self) -> SessionResult<()>;
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

/// In-process store.  Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RefCell<Option<PersistedSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once something has been saved and not cleared.
    pub fn is_populated(&self) -> bool {
        self.inner.borrow().is_some()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> SessionResult<PersistedSession> {
        Ok(self.inner.borrow().clone().unwrap_or_default())
    }

    fn save(&self, session: &PersistedSession) -> SessionResult<()> {
        *self.inner.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        self.inner.borrow_mut().take();
        Ok(())
    }
}

// ── JsonFileStore ─────────────────────────────────────────────────────────────

/// Stores the session as a single pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> SessionResult<PersistedSession> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PersistedSession::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, session: &PersistedSession) -> SessionResult<()> {
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
