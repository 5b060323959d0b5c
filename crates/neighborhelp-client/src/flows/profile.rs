// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Profile page — the signed-in user, their services, their reviews, and the
// edit form.

use neighborhelp_core::LoadState;
use neighborhelp_core::error::{NeighborHelpError, Result};
use neighborhelp_core::forms::ProfileForm;
use neighborhelp_core::human_errors::{self, Notice, user_message};
use neighborhelp_core::types::{Review, Service, User};
use neighborhelp_session::SessionStore;
use tracing::{error, info};

use crate::api::MarketplaceApi;

pub const LOAD_FAILED: &str = "Failed to load profile";
pub const UPDATE_FAILED: &str = "Error updating profile";
pub const UPDATED: &str = "Profile updated successfully!";
pub const SERVICES_FAILED: &str = "Could not load your services.";
pub const REVIEWS_FAILED: &str = "Could not load your reviews.";

/// Everything the profile page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileData {
    pub user: User,
    pub services: LoadState<Vec<Service>>,
    pub reviews: LoadState<Vec<Review>>,
}

/// Fetch the profile, then the user's services and reviews concurrently.
///
/// Only the profile fetch is fatal; either list may fail on its own.
pub async fn load<A: MarketplaceApi>(api: &A, session: &SessionStore) -> Result<ProfileData> {
    let token = session.require_token()?;
    let user = api
        .profile(&token)
        .await
        .inspect_err(|e| error!(error = %e, "failed to load profile"))?;
    session.replace_user_info(user.clone());

    let (services, reviews) = tokio::join!(
        load_services(api, &user.id),
        load_reviews(api, &user.id)
    );
    Ok(ProfileData {
        user,
        services,
        reviews,
    })
}

/// The user's services on their own, for the refresh after an add.
pub async fn load_services<A: MarketplaceApi>(api: &A, user_id: &str) -> LoadState<Vec<Service>> {
    match api.services_by_user(user_id).await {
        Ok(services) => LoadState::Loaded(services),
        Err(e) => {
            error!(user_id, error = %e, "failed to load user services");
            LoadState::Failed(user_message(&e, SERVICES_FAILED))
        }
    }
}

pub async fn load_reviews<A: MarketplaceApi>(api: &A, user_id: &str) -> LoadState<Vec<Review>> {
    match api.reviews_by_user(user_id).await {
        Ok(reviews) => LoadState::Loaded(reviews),
        Err(e) => {
            error!(user_id, error = %e, "failed to load user reviews");
            LoadState::Failed(user_message(&e, REVIEWS_FAILED))
        }
    }
}

/// Send the full record. The cached user is refreshed from the reply.
pub async fn update<A: MarketplaceApi>(
    api: &A,
    session: &SessionStore,
    form: &ProfileForm,
) -> Result<Notice> {
    form.validate()?;
    let token = session.require_token()?;

    let updated = api
        .update_profile(&token, &form.update_request())
        .await
        .inspect_err(|e| error!(error = %e, "profile update failed"))?;
    if let Some(user) = updated {
        session.replace_user_info(user);
    }

    info!(user_id = %form.id, "profile updated");
    Ok(Notice::success(UPDATED))
}

pub fn load_failure(err: &NeighborHelpError) -> String {
    user_message(err, LOAD_FAILED)
}

pub fn update_failure_notice(err: &NeighborHelpError) -> Notice {
    human_errors::error_notice(err, UPDATE_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, TOKEN};
    use neighborhelp_core::types::Role;

    fn signed_in(api: &FakeApi) -> SessionStore {
        let session = SessionStore::in_memory();
        session.set_session(TOKEN, api.state().user.clone());
        session
    }

    #[tokio::test]
    async fn load_fetches_profile_then_both_lists() {
        let api = FakeApi::new().with_service("s1", "Plumbing");
        let session = signed_in(&api);

        let data = load(&api, &session).await.expect("profile");
        assert_eq!(data.user.role, Role::Provider);
        assert_eq!(data.services.loaded().map(Vec::len), Some(1));
        assert_eq!(data.reviews, LoadState::Loaded(Vec::new()));

        let calls = api.calls();
        assert_eq!(calls.first(), Some(&"profile"));
        assert!(calls.contains(&"services_by_user"));
        assert!(calls.contains(&"reviews_by_user"));
    }

    #[tokio::test]
    async fn list_failure_does_not_sink_the_page() {
        let api = FakeApi::new();
        api.fail("reviews_by_user", None);
        let session = signed_in(&api);

        let data = load(&api, &session).await.expect("profile");
        assert_eq!(data.reviews.error(), Some(REVIEWS_FAILED));
        assert!(data.services.loaded().is_some());
    }

    #[tokio::test]
    async fn profile_failure_is_fatal() {
        let api = FakeApi::new();
        api.fail("profile", None);
        let session = signed_in(&api);

        let err = load(&api, &session).await.expect_err("profile failed");
        assert_eq!(load_failure(&err), LOAD_FAILED);
        assert_eq!(api.calls(), vec!["profile"]);
    }

    #[tokio::test]
    async fn update_sends_full_record_and_refreshes_cache() {
        let api = FakeApi::new();
        let session = signed_in(&api);
        let mut form = ProfileForm::from_user(&api.state().user);
        form.name = "Ravi Kumar".into();

        let notice = update(&api, &session, &form).await.expect("update");
        assert_eq!(notice.text, UPDATED);

        let sent = api.state().last_update.clone().expect("update sent");
        assert_eq!(sent.id, "u1");
        assert_eq!(sent.password, "");
        assert_eq!(
            session.user_info().map(|u| u.name).as_deref(),
            Some("Ravi Kumar")
        );
    }

    #[tokio::test]
    async fn invalid_edit_never_sent() {
        let api = FakeApi::new();
        let session = signed_in(&api);
        let mut form = ProfileForm::from_user(&api.state().user);
        form.address.clear();

        let err = update(&api, &session, &form).await.expect_err("invalid");
        assert_eq!(update_failure_notice(&err).text, "All fields are required");
        assert_eq!(api.count("update_profile"), 0);
    }

    #[tokio::test]
    async fn update_failure_uses_fallback() {
        let api = FakeApi::new();
        api.fail("update_profile", None);
        let session = signed_in(&api);
        let form = ProfileForm::from_user(&api.state().user);

        let err = update(&api, &session, &form).await.expect_err("failed");
        assert_eq!(update_failure_notice(&err).text, UPDATE_FAILED);
    }
}
