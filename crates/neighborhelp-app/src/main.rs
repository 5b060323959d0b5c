// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// NeighborHelp — local services marketplace
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod components;
mod pages;
mod services;
mod state;

use dioxus::prelude::*;
use neighborhelp_client::{Destination, Resolution, resolve};
use neighborhelp_core::config::API_BASE_URL_ENV;

use components::header::Header;
use pages::auth::AuthPage;
use pages::dashboard::Dashboard;
use pages::profile::ProfilePage;
use pages::service_profile::ServiceProfile;

use services::app_services::{self, AppServices};
use state::AppState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("NeighborHelp starting");

    dioxus::launch(app);
}

/// Top-level route enum. Everything inside `Guarded` needs a session.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    AuthPage {},
    #[layout(Guarded)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        ProfilePage {},
        #[route("/service/:service_id")]
        ServiceProfile { service_id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    fn destination(&self) -> Destination {
        match self {
            Route::AuthPage {} | Route::NotFound { .. } => Destination::Auth,
            Route::Dashboard {} => Destination::Dashboard,
            Route::ProfilePage {} => Destination::Profile,
            Route::ServiceProfile { service_id } => Destination::ServiceProfile(service_id.clone()),
        }
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Auth => Route::AuthPage {},
            Destination::Dashboard => Route::Dashboard {},
            Destination::Profile => Route::ProfilePage {},
            Destination::ServiceProfile(service_id) => Route::ServiceProfile { service_id },
        }
    }
}

/// Root component.
fn app() -> Element {
    let services = use_hook(|| {
        AppServices::init()
            .inspect(|_| tracing::info!("backend services initialised"))
            .map_err(|e| {
                tracing::error!(error = %e, "startup failed");
                e.to_string()
            })
    });
    let svc = match services {
        Ok(svc) => svc,
        Err(message) => return rsx! { StartupError { message } },
    };

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    let mut state = use_context_provider(|| Signal::new(AppState::new(svc.session())));

    // Mirror the session store into the UI so guards react to sign-out
    let store = svc.session().clone();
    let _watcher = use_resource(move || {
        let mut changes = store.subscribe();
        async move {
            while changes.changed().await.is_ok() {
                let current = changes.borrow_and_update().clone();
                tracing::debug!(signed_in = current.is_some(), "session changed");
                state.write().session = current;
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Layout for every protected page. Re-resolves on each session change and
/// replaces the route when the guard says so.
#[component]
fn Guarded() -> Element {
    let state = use_context::<Signal<AppState>>();
    let route = use_route::<Route>();
    let nav = navigator();

    let redirect = match resolve(&route.destination(), state.read().is_authenticated()) {
        Resolution::Allow => None,
        Resolution::Redirect(to) => Some(to),
    };

    use_effect(use_reactive((&redirect,), move |(redirect,)| {
        if let Some(to) = redirect {
            tracing::info!(to = %to.path(), "route guard redirect");
            nav.replace(Route::from(to));
        }
    }));

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: #f5f6f8;",
            Header {}
            div { class: "page-content",
                style: "flex: 1; padding: 24px; max-width: 1100px; width: 100%; margin: 0 auto; box-sizing: border-box;",
                if redirect.is_some() {
                    p { style: "color: #888; text-align: center; margin-top: 48px;", "Redirecting…" }
                } else {
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Unknown paths go back to the start; the sign-in page forwards signed-in
/// users on to the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    use_effect(move || {
        tracing::warn!(path = %segments.join("/"), "unknown route");
        nav.replace(Route::AuthPage {});
    });
    rsx! {}
}

#[component]
fn StartupError(message: String) -> Element {
    let config_file = app_services::config_path(&services::data_dir::data_dir());
    rsx! {
        div { style: "max-width: 560px; margin: 80px auto; padding: 24px; font-family: system-ui, -apple-system, sans-serif; border: 1px solid #f5c2c0; border-radius: 12px; background: #fff5f5;",
            h1 { style: "margin-top: 0; color: #c0392b;", "NeighborHelp could not start" }
            p { "{message}" }
            p { style: "color: #555; font-size: 14px;",
                "Set \"api_base_url\" in "
                code { "{config_file.display()}" }
                " or export "
                code { "{API_BASE_URL_ENV}" }
                ", then restart."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_and_destinations_share_paths() {
        for destination in [
            Destination::Auth,
            Destination::Dashboard,
            Destination::Profile,
            Destination::ServiceProfile("64f1c2".into()),
        ] {
            let route = Route::from(destination.clone());
            assert_eq!(route.to_string(), destination.path());
            assert_eq!(route.destination(), destination);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_auth() {
        let route: Route = "/nowhere/else".parse().expect("catch-all");
        assert_eq!(route.destination(), Destination::Auth);
    }

    #[test]
    fn signed_out_visitor_is_sent_to_sign_in() {
        let route = Route::ProfilePage {};
        assert_eq!(
            resolve(&route.destination(), false),
            Resolution::Redirect(Destination::Auth)
        );
    }
}
