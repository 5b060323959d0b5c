// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Add-service overlay submit.

use std::time::Duration;

use neighborhelp_core::error::{NeighborHelpError, Result};
use neighborhelp_core::forms::ServiceForm;
use neighborhelp_core::human_errors::{self, Notice};
use neighborhelp_session::SessionStore;
use tracing::{error, info};

use crate::api::MarketplaceApi;

pub const ADDED: &str = "Service added successfully!";
pub const ADD_FAILED: &str = "Error adding service";

/// Post the form as a new service under the current session.
pub async fn submit<A: MarketplaceApi>(
    api: &A,
    session: &SessionStore,
    form: &ServiceForm,
) -> Result<Notice> {
    form.validate()?;
    let token = session.require_token()?;

    api.add_service(&token, &form.new_service())
        .await
        .inspect_err(|e| error!(error = %e, "failed to add service"))?;

    info!(service_name = %form.service_name, "service added");
    Ok(Notice::success(ADDED))
}

/// [`submit`], then settle the overlay.
///
/// `on_added` runs as soon as the post lands so the parent refreshes even if
/// the overlay is torn down early. `on_close` runs after `close_delay`, which
/// keeps the confirmation on screen; dropping the future skips only the close.
pub async fn submit_then_close<A: MarketplaceApi>(
    api: &A,
    session: &SessionStore,
    form: &ServiceForm,
    close_delay: Duration,
    on_added: impl FnOnce(Notice),
    on_close: impl FnOnce(),
) -> Result<()> {
    let notice = submit(api, session, form).await?;
    on_added(notice);
    tokio::time::sleep(close_delay).await;
    on_close();
    Ok(())
}

pub fn failure_notice(err: &NeighborHelpError) -> Notice {
    human_errors::error_notice(err, ADD_FAILED)
}
