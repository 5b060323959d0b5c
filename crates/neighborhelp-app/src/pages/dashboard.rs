// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dashboard — grid of every listed service.

use dioxus::prelude::*;
use neighborhelp_client::flows::dashboard;
use neighborhelp_core::LoadState;

use crate::components::service_card::ServiceCard;
use crate::services::app_services::AppServices;

#[component]
pub fn Dashboard() -> Element {
    let svc = use_context::<AppServices>();

    let services = use_resource(move || {
        let svc = svc.clone();
        async move { dashboard::load(svc.api(), svc.session()).await }
    });

    let body = match &*services.read() {
        None | Some(LoadState::Loading) => rsx! {
            p { style: "color: #888; text-align: center; margin: 48px 0;", "Loading services…" }
        },
        Some(LoadState::Failed(message)) => rsx! {
            p { style: "color: #c0392b; text-align: center; margin: 48px 0;", "{message}" }
        },
        Some(LoadState::Loaded(list)) if list.is_empty() => rsx! {
            p { style: "color: #aaa; text-align: center; margin: 48px 0;", "{dashboard::EMPTY}" }
        },
        Some(LoadState::Loaded(list)) => rsx! {
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px;",
                for service in list.iter() {
                    ServiceCard { key: "{service.id}", service: service.clone() }
                }
            }
        },
    };

    rsx! {
        div {
            h1 { "Services near you" }
            {body}
        }
    }
}
