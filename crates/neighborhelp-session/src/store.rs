// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reactive session store.
//
// Reads are synchronous and never touch the backend: the current value lives
// in a `tokio::sync::watch` channel, which doubles as the change feed the
// router observes. Writes are whole-value and last-writer-wins.

use std::sync::Arc;

use neighborhelp_core::error::{NeighborHelpError, Result};
use neighborhelp_core::types::{Session, User};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::backend::{MemoryBackend, SessionBackend};

/// Shared handle to the signed-in state. Clones share the same session.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
    state: Arc<watch::Sender<Option<Session>>>,
}

impl SessionStore {
    /// Open a store, restoring whatever the backend persisted.
    ///
    /// An unreadable session is discarded and the store starts signed out.
    pub fn open(backend: impl SessionBackend + 'static) -> Self {
        let initial = match backend.load() {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "persisted session unreadable, starting signed out");
                if let Err(e) = backend.clear() {
                    warn!(error = %e, "failed to discard unreadable session");
                }
                None
            }
        };
        if let Some(ref session) = initial {
            info!(user = %session.user_info.email, "restored session");
        }

        let (state, _) = watch::channel(initial);
        Self {
            backend: Arc::new(backend),
            state: Arc::new(state),
        }
    }

    /// A store that forgets everything on exit.
    pub fn in_memory() -> Self {
        Self::open(MemoryBackend::new())
    }

    // -- Reads ---------------------------------------------------------------

    /// The bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.state.borrow().as_ref().map(|s| s.token.clone())
    }

    /// The bearer token, or [`NeighborHelpError::NotAuthenticated`].
    pub fn require_token(&self) -> Result<String> {
        self.token().ok_or(NeighborHelpError::NotAuthenticated)
    }

    pub fn current(&self) -> Option<Session> {
        self.state.borrow().clone()
    }

    /// Last-known user snapshot.
    pub fn user_info(&self) -> Option<User> {
        self.state.borrow().as_ref().map(|s| s.user_info.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Change feed. The receiver sees the current value immediately and
    /// every later sign-in, profile refresh, and sign-out.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.state.subscribe()
    }

    // -- Writes --------------------------------------------------------------

    /// Replace the session. A persistence failure is logged and the session
    /// still applies for this run.
    pub fn set_session(&self, token: impl Into<String>, user_info: User) {
        let session = Session::new(token, user_info);
        if let Err(e) = self.backend.save(&session) {
            warn!(error = %e, "failed to persist session; it will not survive a restart");
        }
        info!(user = %session.user_info.email, role = %session.user_info.role, "signed in");
        self.state.send_replace(Some(session));
    }

    /// Overwrite the cached user while keeping the token. No-op when signed out.
    pub fn replace_user_info(&self, user_info: User) {
        if let Some(token) = self.token() {
            self.set_session(token, user_info);
        }
    }

    /// Sign out. Everyone subscribed sees `None` immediately.
    pub fn clear_session(&self) {
        if let Err(e) = self.backend.clear() {
            warn!(error = %e, "failed to remove persisted session");
        }
        if self.state.send_replace(None).is_some() {
            info!("signed out");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token.
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FileBackend;

    fn user(email: &str) -> User {
        User {
            id: "u1".into(),
            name: "Asha".into(),
            email: email.into(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_signed_out() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert!(matches!(
            store.require_token(),
            Err(NeighborHelpError::NotAuthenticated)
        ));
    }

    #[test]
    fn set_and_clear() {
        let store = SessionStore::in_memory();
        store.set_session("tok-1", user("asha@example.com"));
        assert_eq!(store.token().as_deref(), Some("tok-1"));
        assert_eq!(store.require_token().expect("token"), "tok-1");

        store.clear_session();
        assert_eq!(store.token(), None);
        assert_eq!(store.user_info(), None);
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.set_session("tok", user("asha@example.com"));
        assert!(other.is_authenticated());
    }

    #[test]
    fn replace_user_info_keeps_token() {
        let store = SessionStore::in_memory();
        store.replace_user_info(user("ignored@example.com"));
        assert!(!store.is_authenticated());

        store.set_session("tok", user("old@example.com"));
        store.replace_user_info(user("new@example.com"));
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(
            store.user_info().map(|u| u.email).as_deref(),
            Some("new@example.com")
        );
    }

    #[test]
    fn survives_restart_until_sign_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        SessionStore::open(FileBackend::new(&path)).set_session("tok", user("a@b.io"));
        let reopened = SessionStore::open(FileBackend::new(&path));
        assert_eq!(reopened.token().as_deref(), Some("tok"));

        reopened.clear_session();
        assert!(!SessionStore::open(FileBackend::new(&path)).is_authenticated());
    }

    #[test]
    fn unreadable_file_starts_signed_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "garbage").expect("write");

        let store = SessionStore::open(FileBackend::new(&path));
        assert!(!store.is_authenticated());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn subscribers_see_sign_out_immediately() {
        let store = SessionStore::in_memory();
        store.set_session("tok", user("a@b.io"));

        let mut rx = store.subscribe();
        assert!(rx.borrow_and_update().is_some());

        store.clear_session();
        rx.changed().await.expect("sender alive");
        assert!(rx.borrow_and_update().is_none());
    }
}
