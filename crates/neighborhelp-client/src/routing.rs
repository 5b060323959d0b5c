// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Navigation guard.
//
// A pure function of "where do you want to go" and "is anyone signed in".
// The UI re-evaluates it whenever the session changes, not only on
// navigation.

/// The four views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Sign in / sign up (`/`).
    Auth,
    /// All services (`/dashboard`).
    Dashboard,
    /// The signed-in user's profile (`/profile`).
    Profile,
    /// One service and its reviews (`/service/:id`).
    ServiceProfile(String),
}

impl Destination {
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Auth)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Auth => "/".into(),
            Self::Dashboard => "/dashboard".into(),
            Self::Profile => "/profile".into(),
            Self::ServiceProfile(id) => format!("/service/{id}"),
        }
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Allow,
    Redirect(Destination),
}

/// Signed out: only the sign-in view. Signed in: everything but the sign-in
/// view, which forwards to the dashboard.
pub fn resolve(requested: &Destination, authenticated: bool) -> Resolution {
    match (requested.requires_session(), authenticated) {
        (true, false) => Resolution::Redirect(Destination::Auth),
        (false, true) => Resolution::Redirect(Destination::Dashboard),
        _ => Resolution::Allow,
    }
}
