// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Auth page — sign in and sign up share one form.

use dioxus::prelude::*;
use neighborhelp_client::flows::auth;
use neighborhelp_client::{Destination, Resolution, resolve};
use neighborhelp_core::forms::{AuthForm, AuthMode};
use neighborhelp_core::human_errors::Notice;
use neighborhelp_core::types::Role;

use crate::Route;
use crate::components::notice::NoticeLine;
use crate::services::app_services::AppServices;
use crate::state::AppState;

const FIELD: &str = "width: 100%; padding: 10px; margin: 4px 0 12px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box;";

#[component]
pub fn AuthPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut mode = use_signal(AuthMode::default);
    let mut form = use_signal(AuthForm::default);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut busy = use_signal(|| false);
    let nav = navigator();

    // Already signed in: straight on to the dashboard. Checked once, so a
    // fresh sign-in still shows its confirmation before leaving.
    use_effect(move || {
        if let Resolution::Redirect(to) =
            resolve(&Destination::Auth, state.peek().is_authenticated())
        {
            nav.replace(Route::from(to));
        }
    });

    let registering = mode() == AuthMode::Register;
    let (title, toggle_prompt, toggle_label) = match mode() {
        AuthMode::Login => ("Welcome back", "New here?", "Create an account"),
        AuthMode::Register => ("Join NeighborHelp", "Already registered?", "Sign in"),
    };

    rsx! {
        div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f5f6f8; font-family: system-ui, -apple-system, sans-serif;",
            div { style: "width: 380px; padding: 32px; border-radius: 12px; background: white; box-shadow: 0 2px 12px rgba(0,0,0,0.08);",
                h1 { style: "margin-top: 0; color: #1f6f5c;", "{title}" }

                if registering {
                    label { "Name" }
                    input { style: FIELD, value: "{form.read().name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                label { "Email" }
                input { style: FIELD, r#type: "email", value: "{form.read().email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                label { "Password" }
                input { style: FIELD, r#type: "password", value: "{form.read().password}",
                    oninput: move |evt| form.write().password = evt.value(),
                }
                if registering {
                    label { "Phone" }
                    input { style: FIELD, r#type: "tel", value: "{form.read().phone}",
                        oninput: move |evt| form.write().phone = evt.value(),
                    }
                    label { "Address" }
                    input { style: FIELD, value: "{form.read().address}",
                        oninput: move |evt| form.write().address = evt.value(),
                    }
                    label { "I am a" }
                    select { style: FIELD,
                        value: form.read().role.as_str(),
                        onchange: move |evt| {
                            if let Some(role) = Role::from_keyword(&evt.value()) {
                                form.write().role = role;
                            }
                        },
                        option { value: "consumer", "{Role::Consumer.label()}" }
                        option { value: "provider", "{Role::Provider.label()}" }
                    }
                }

                button {
                    style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #1f6f5c; color: white; font-size: 16px; margin-top: 4px;",
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }
                        busy.set(true);
                        notice.set(None);
                        let svc = svc.clone();
                        let current_mode = mode();
                        let submitted = form.read().clone();
                        spawn(async move {
                            match auth::submit(svc.api(), svc.session(), current_mode, &submitted).await {
                                Ok(done) => {
                                    notice.set(Some(done));
                                    tokio::time::sleep(svc.config().redirect_delay()).await;
                                    busy.set(false);
                                    nav.replace(Route::Dashboard {});
                                }
                                Err(e) => {
                                    notice.set(Some(auth::failure_notice(&e)));
                                    busy.set(false);
                                }
                            }
                        });
                    },
                    if busy() { "Please wait…" } else { "{mode().submit_label()}" }
                }
                NoticeLine { notice: notice() }

                p { style: "text-align: center; font-size: 14px; color: #666; margin-bottom: 0;",
                    "{toggle_prompt} "
                    button {
                        style: "border: none; background: none; color: #1f6f5c; cursor: pointer; font-size: 14px; text-decoration: underline;",
                        onclick: move |_| {
                            mode.set(mode().toggled());
                            notice.set(None);
                        },
                        "{toggle_label}"
                    }
                }
            }
        }
    }
}
