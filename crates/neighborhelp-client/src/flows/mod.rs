// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page flows — the fetch/submit logic behind each view, free of UI code.
//
// Every flow takes the API and the session store as arguments. Loads return
// a `LoadState` (failures are a visible state, and are logged); submits
// return `Result<Notice>` and the page turns errors into notices with the
// flow's fallback text.

pub mod add_service;
pub mod auth;
pub mod dashboard;
pub mod profile;
pub mod service_profile;
