// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service card used by the dashboard grid and the profile's service list.

use dioxus::prelude::*;
use neighborhelp_core::display;
use neighborhelp_core::types::Service;

use crate::Route;

#[component]
pub fn ServiceCard(service: Service) -> Element {
    let initial = display::initial(&service.service_name);
    let provider = display::provider_name(&service);
    let rating = display::card_rating(&service);
    let reviews = display::review_count_label(&service);
    let description = display::description(&service);
    let kind = service.service_type.clone().unwrap_or_default();

    rsx! {
        Link { to: Route::ServiceProfile { service_id: service.id.clone() },
            style: "display: block; text-decoration: none; color: inherit;",
            div { style: "padding: 16px; border: 1px solid #e0e0e0; border-radius: 12px; background: white; height: 100%; box-sizing: border-box;",
                div { style: "display: flex; gap: 12px; align-items: center;",
                    div { style: "width: 44px; height: 44px; border-radius: 50%; background: #1f6f5c; color: white; display: flex; align-items: center; justify-content: center; font-size: 20px; font-weight: bold;",
                        "{initial}"
                    }
                    div {
                        strong { "{service.service_name}" }
                        p { style: "margin: 2px 0 0; color: #666; font-size: 13px;", "by {provider}" }
                    }
                }
                if !kind.is_empty() {
                    span { style: "display: inline-block; margin-top: 8px; padding: 2px 8px; border-radius: 10px; background: #e8f3f0; color: #1f6f5c; font-size: 12px;",
                        "{kind}"
                    }
                }
                p { style: "color: #444; font-size: 14px;", "{description}" }
                p { style: "color: #b7791f; font-size: 13px; margin: 0;", "★ {rating} {reviews}" }
            }
        }
    }
}
