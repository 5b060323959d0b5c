// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Top bar on every signed-in page — Home, Profile, Logout.

use dioxus::prelude::*;
use neighborhelp_client::flows;

use crate::Route;
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Header() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let greeting = state
        .read()
        .user()
        .map(|u| format!("Hi, {}", u.name))
        .unwrap_or_default();

    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: #1f6f5c; color: white;",
            strong { style: "font-size: 20px;", "NeighborHelp" }
            nav { style: "display: flex; gap: 16px; align-items: center;",
                span { style: "font-size: 14px; opacity: 0.85;", "{greeting}" }
                Link { to: Route::Dashboard {}, style: "color: white; text-decoration: none;", "Home" }
                Link { to: Route::ProfilePage {}, style: "color: white; text-decoration: none;", "Profile" }
                button {
                    style: "padding: 6px 12px; border-radius: 6px; border: 1px solid white; background: transparent; color: white; cursor: pointer;",
                    onclick: move |_| {
                        tracing::info!("signing out");
                        // The guard notices the cleared session and redirects.
                        flows::auth::sign_out(svc.session());
                    },
                    "Logout"
                }
            }
        }
    }
}
