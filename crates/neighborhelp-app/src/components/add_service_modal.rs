// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Add-service overlay, opened from the profile page by providers.

use dioxus::prelude::*;
use neighborhelp_client::flows::add_service;
use neighborhelp_core::forms::ServiceForm;
use neighborhelp_core::human_errors::Notice;

use crate::components::notice::NoticeLine;
use crate::services::app_services::AppServices;

const FIELD: &str = "width: 100%; padding: 8px; margin: 4px 0 12px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box;";

/// On success the fields clear and `on_service_added` fires at once; the
/// confirmation stays up for the configured delay before `on_close`.
#[component]
pub fn AddServiceModal(on_close: EventHandler<()>, on_service_added: EventHandler<()>) -> Element {
    let svc = use_context::<AppServices>();
    let mut form = use_signal(ServiceForm::default);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut busy = use_signal(|| false);

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.45); display: flex; align-items: center; justify-content: center; z-index: 10;",
            div { style: "width: 440px; max-width: 92vw; max-height: 90vh; overflow-y: auto; padding: 24px; border-radius: 12px; background: white;",
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    h2 { style: "margin: 0;", "Add Service" }
                    button {
                        style: "border: none; background: none; font-size: 22px; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                label { "Service name" }
                input { style: FIELD, value: "{form.read().service_name}",
                    oninput: move |evt| form.write().service_name = evt.value(),
                }
                label { "Service type" }
                input { style: FIELD, placeholder: "e.g. Plumbing", value: "{form.read().service_type}",
                    oninput: move |evt| form.write().service_type = evt.value(),
                }
                label { "Description" }
                textarea { style: FIELD, rows: "3", value: "{form.read().description}",
                    oninput: move |evt| form.write().description = evt.value(),
                }
                label { "Contact phone" }
                input { style: FIELD, r#type: "tel", value: "{form.read().contact_phone}",
                    oninput: move |evt| form.write().contact_phone = evt.value(),
                }
                div { style: "display: flex; gap: 12px;",
                    div { style: "flex: 1;",
                        label { "From" }
                        input { style: FIELD, r#type: "time", value: "{form.read().working_start}",
                            oninput: move |evt| form.write().working_start = evt.value(),
                        }
                    }
                    div { style: "flex: 1;",
                        label { "To" }
                        input { style: FIELD, r#type: "time", value: "{form.read().working_end}",
                            oninput: move |evt| form.write().working_end = evt.value(),
                        }
                    }
                }

                button {
                    style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #1f6f5c; color: white; font-size: 16px;",
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }
                        busy.set(true);
                        notice.set(None);
                        let svc = svc.clone();
                        let submitted = form.read().clone();
                        spawn(async move {
                            let settled = add_service::submit_then_close(
                                svc.api(),
                                svc.session(),
                                &submitted,
                                svc.config().modal_close_delay(),
                                |done| {
                                    notice.set(Some(done));
                                    form.set(ServiceForm::default());
                                    on_service_added.call(());
                                },
                                || on_close.call(()),
                            )
                            .await;
                            if let Err(e) = settled {
                                notice.set(Some(add_service::failure_notice(&e)));
                            }
                            busy.set(false);
                        });
                    },
                    if busy() { "Adding…" } else { "Add Service" }
                }
                NoticeLine { notice: notice() }
            }
        }
    }
}
