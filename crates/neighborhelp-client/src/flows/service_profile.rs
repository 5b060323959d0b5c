// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service detail page: one service, its reviews, and the review composer.
//
// The service and its reviews are fetched independently so one failing does
// not blank the other.

use neighborhelp_core::{LoadState, RequestGeneration, Ticket};
use neighborhelp_core::error::{NeighborHelpError, Result};
use neighborhelp_core::forms::ReviewDraft;
use neighborhelp_core::human_errors::{self, Notice, user_message};
use neighborhelp_core::types::{Review, Service};
use neighborhelp_session::SessionStore;
use tracing::{debug, error, info};

use crate::api::MarketplaceApi;

pub const SERVICE_FAILED: &str = "Could not load this service.";
pub const REVIEWS_FAILED: &str = "Could not load reviews.";
pub const REVIEW_FAILED: &str = "Could not submit your review.";
pub const NO_REVIEWS: &str = "No reviews yet. Be the first to leave one!";

pub async fn load_service<A: MarketplaceApi>(api: &A, service_id: &str) -> LoadState<Service> {
    match api.service(service_id).await {
        Ok(service) => LoadState::Loaded(service),
        Err(e) => {
            error!(service_id, error = %e, "failed to load service");
            LoadState::Failed(user_message(&e, SERVICE_FAILED))
        }
    }
}

pub async fn load_reviews<A: MarketplaceApi>(api: &A, service_id: &str) -> LoadState<Vec<Review>> {
    match api.reviews_for_service(service_id).await {
        Ok(reviews) => LoadState::Loaded(reviews),
        Err(e) => {
            error!(service_id, error = %e, "failed to load reviews");
            LoadState::Failed(user_message(&e, REVIEWS_FAILED))
        }
    }
}

/// Post the draft, then re-fetch the review list.
///
/// A draft with no stars selected is rejected before any request. The
/// returned list is the server's view after the post; the caller clears the
/// draft on success.
pub async fn submit_review<A: MarketplaceApi>(
    api: &A,
    session: &SessionStore,
    service_id: &str,
    draft: &ReviewDraft,
) -> Result<LoadState<Vec<Review>>> {
    let review = draft.review()?;
    let token = session.require_token()?;

    api.add_review(&token, service_id, &review)
        .await
        .inspect_err(|e| error!(service_id, error = %e, "failed to add review"))?;
    info!(service_id, stars = review.rating.stars(), "review added");

    Ok(load_reviews(api, service_id).await)
}

/// What the page does with a finished review submit.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewSubmit {
    /// Show the re-fetched list and clear the draft.
    Posted(LoadState<Vec<Review>>),
    /// Show the notice. A review load already in flight still lands.
    Rejected(Notice),
    /// The page moved to another service while the post was in flight.
    Stale,
}

/// [`submit_review`] for a page whose review loads run under `generation`.
///
/// Nothing is superseded until the post succeeds, so a rejected draft never
/// strands the list on its loading state.
pub async fn submit_review_under<A: MarketplaceApi>(
    api: &A,
    session: &SessionStore,
    service_id: &str,
    draft: &ReviewDraft,
    generation: &RequestGeneration,
) -> ReviewSubmit {
    let issued = generation.current();
    let result = submit_review(api, session, service_id, draft).await;
    settle_review_submit(generation, issued, result)
}

fn settle_review_submit(
    generation: &RequestGeneration,
    issued: Ticket,
    result: Result<LoadState<Vec<Review>>>,
) -> ReviewSubmit {
    if !generation.is_current(issued) {
        debug!("dropping review submit for a page that moved on");
        return ReviewSubmit::Stale;
    }
    match result {
        Ok(refreshed) => {
            // The re-fetch is newer than any list load still in flight.
            generation.invalidate();
            ReviewSubmit::Posted(refreshed)
        }
        Err(e) => ReviewSubmit::Rejected(review_failure_notice(&e)),
    }
}

pub fn review_failure_notice(err: &NeighborHelpError) -> Notice {
    human_errors::error_notice(err, REVIEW_FAILED)
}
