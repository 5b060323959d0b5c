// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dashboard — every listed service, fetched once per visit.

use neighborhelp_core::LoadState;
use neighborhelp_core::human_errors::user_message;
use neighborhelp_core::types::Service;
use neighborhelp_session::SessionStore;
use tracing::{error, info};

use crate::api::MarketplaceApi;

/// Shown when the list cannot be fetched and the server gave no reason.
pub const LOAD_FAILED: &str = "Could not load services. Please try again.";

/// Shown in place of the grid when the list is empty.
pub const EMPTY: &str = "No services available";

/// The whole list, unpaginated.
pub async fn load<A: MarketplaceApi>(api: &A, session: &SessionStore) -> LoadState<Vec<Service>> {
    let token = match session.require_token() {
        Ok(token) => token,
        Err(e) => return LoadState::Failed(user_message(&e, LOAD_FAILED)),
    };

    match api.list_services(&token).await {
        Ok(services) => {
            info!(count = services.len(), "services loaded");
            LoadState::Loaded(services)
        }
        Err(e) => {
            error!(error = %e, "failed to load services");
            LoadState::Failed(user_message(&e, LOAD_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, TOKEN};
    use neighborhelp_core::types::User;

    fn signed_in() -> SessionStore {
        let session = SessionStore::in_memory();
        session.set_session(TOKEN, User::default());
        session
    }

    #[tokio::test]
    async fn empty_list_is_loaded_not_failed() {
        let api = FakeApi::new();
        let state = load(&api, &signed_in()).await;
        assert_eq!(state, LoadState::Loaded(Vec::new()));
    }

    #[tokio::test]
    async fn lists_every_service() {
        let api = FakeApi::new()
            .with_service("s1", "Plumbing")
            .with_service("s2", "Tutoring");
        let state = load(&api, &signed_in()).await;
        let names: Vec<_> = state
            .loaded()
            .expect("loaded")
            .iter()
            .map(|s| s.service_name.as_str())
            .collect();
        assert_eq!(names, ["Plumbing", "Tutoring"]);
        assert_eq!(api.count("list_services"), 1);
    }

    #[tokio::test]
    async fn failure_is_an_explicit_state() {
        let api = FakeApi::new();
        api.fail("list_services", None);
        let state = load(&api, &signed_in()).await;
        assert_eq!(state.error(), Some(LOAD_FAILED));
    }

    #[tokio::test]
    async fn signed_out_makes_no_request() {
        let api = FakeApi::new();
        let state = load(&api, &SessionStore::in_memory()).await;
        assert!(state.error().is_some());
        assert!(api.calls().is_empty());
    }
}
