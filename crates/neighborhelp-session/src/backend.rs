// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session persistence backends.
//
// The file backend keeps the session across restarts until an explicit
// sign-out; the memory backend is used by tests and as a fallback when the
// data directory is unusable.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use neighborhelp_core::error::Result;
use neighborhelp_core::types::Session;
use tracing::{debug, instrument};

/// Where a session lives between runs. Every write replaces the whole value.
pub trait SessionBackend: Send + Sync {
    /// The stored session, or `None` if nobody is signed in.
    fn load(&self) -> Result<Option<Session>>;

    /// Replace whatever is stored with `session`.
    fn save(&self, session: &Session) -> Result<()>;

    /// Forget the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

/// JSON file on disk (`token`, `userInfo`, `savedAt`).
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionBackend for FileBackend {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<Session>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session: Session = serde_json::from_str(&data)?;
        debug!("loaded persisted session");
        Ok(Some(session))
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a crash never leaves half a session behind.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(session)?)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!("session persisted");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local storage; nothing survives a restart.
#[derive(Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<Session>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self.slot.lock().expect("session lock poisoned").clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.slot.lock().expect("session lock poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().expect("session lock poisoned") = None;
        Ok(())
    }
}
