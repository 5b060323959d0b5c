// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — the reactive mirror of the session store.

use neighborhelp_core::types::{Session, User};
use neighborhelp_session::SessionStore;

/// Shared state accessible to all pages via `use_context`.
///
/// Written only by the session watcher in `app()`; pages read it to decide
/// what to show and the guarded layout reads it to decide where to go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// The signed-in session, if any.
    pub session: Option<Session>,
}

impl AppState {
    pub fn new(store: &SessionStore) -> Self {
        Self {
            session: store.current(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_store_snapshot() {
        let store = SessionStore::in_memory();
        assert!(!AppState::new(&store).is_authenticated());

        store.set_session(
            "jwt-1",
            User {
                name: "Asha".into(),
                ..Default::default()
            },
        );
        let state = AppState::new(&store);
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.name.as_str()), Some("Asha"));
    }
}
