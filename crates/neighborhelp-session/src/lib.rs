// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// neighborhelp-session — the one piece of state shared between views.
//
// A `SessionStore` holds the bearer token and the last-known user, persists
// them through a `SessionBackend`, and publishes every change so the router
// can react the moment a session appears or disappears.

pub mod backend;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, SessionBackend};
pub use store::SessionStore;
