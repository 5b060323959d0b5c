// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Profile page — account details, the edit form, the user's services and
// reviews, and (for providers) the add-service overlay.

use dioxus::prelude::*;
use neighborhelp_client::flows::profile;
use neighborhelp_core::LoadState;
use neighborhelp_core::display;
use neighborhelp_core::forms::ProfileForm;
use neighborhelp_core::human_errors::Notice;
use neighborhelp_core::types::{Review, Service, User};

use crate::components::add_service_modal::AddServiceModal;
use crate::components::notice::NoticeLine;
use crate::components::service_card::ServiceCard;
use crate::services::app_services::AppServices;

const FIELD: &str = "width: 100%; padding: 8px; margin: 4px 0 12px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box;";
const SECTION: &str = "margin: 16px 0; padding: 20px; border-radius: 12px; background: white; border: 1px solid #e0e0e0;";

#[component]
pub fn ProfilePage() -> Element {
    let svc = use_context::<AppServices>();
    let mut user = use_signal(|| Option::<User>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut services = use_signal(LoadState::<Vec<Service>>::default);
    let mut reviews = use_signal(LoadState::<Vec<Review>>::default);
    let mut form = use_signal(ProfileForm::default);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut busy = use_signal(|| false);
    let mut show_modal = use_signal(|| false);

    let svc_load = svc.clone();
    let _loader = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            match profile::load(svc.api(), svc.session()).await {
                Ok(data) => {
                    form.set(ProfileForm::from_user(&data.user));
                    user.set(Some(data.user));
                    services.set(data.services);
                    reviews.set(data.reviews);
                }
                Err(e) => load_error.set(Some(profile::load_failure(&e))),
            }
        }
    });

    // Only the services list is re-fetched after an add.
    let svc_refresh = svc.clone();
    let refresh_services = move |_: ()| {
        let Some(user_id) = user.peek().as_ref().map(|u| u.id.clone()) else {
            return;
        };
        let svc = svc_refresh.clone();
        spawn(async move {
            services.set(profile::load_services(svc.api(), &user_id).await);
        });
    };

    if let Some(message) = load_error() {
        return rsx! {
            p { style: "color: #c0392b; text-align: center; margin: 48px 0;", "{message}" }
        };
    }
    let Some(current) = user() else {
        return rsx! {
            p { style: "color: #888; text-align: center; margin: 48px 0;", "Loading profile…" }
        };
    };
    let is_provider = current.role.can_list_services();
    let initial = display::initial(&current.name);

    rsx! {
        div {
            section { style: SECTION,
                div { style: "display: flex; gap: 16px; align-items: center;",
                    div { style: "width: 56px; height: 56px; border-radius: 50%; background: #1f6f5c; color: white; display: flex; align-items: center; justify-content: center; font-size: 24px; font-weight: bold;",
                        "{initial}"
                    }
                    div {
                        h1 { style: "margin: 0;", "{current.name}" }
                        p { style: "margin: 2px 0 0; color: #666;", "{current.email} · {current.role.label()}" }
                    }
                }
            }

            section { style: SECTION,
                h3 { style: "margin-top: 0;", "Edit profile" }
                label { "Name" }
                input { style: FIELD, value: "{form.read().name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
                label { "Email" }
                input { style: FIELD, r#type: "email", value: "{form.read().email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                label { "Phone" }
                input { style: FIELD, r#type: "tel", value: "{form.read().phone}",
                    oninput: move |evt| form.write().phone = evt.value(),
                }
                label { "Address" }
                input { style: FIELD, value: "{form.read().address}",
                    oninput: move |evt| form.write().address = evt.value(),
                }
                label { "New password" }
                input { style: FIELD, r#type: "password", placeholder: "Leave blank to keep", value: "{form.read().password}",
                    oninput: move |evt| form.write().password = evt.value(),
                }
                button {
                    style: "padding: 10px 20px; border-radius: 8px; border: none; background: #1f6f5c; color: white; font-size: 15px;",
                    disabled: busy(),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            if busy() {
                                return;
                            }
                            busy.set(true);
                            notice.set(None);
                            let svc = svc.clone();
                            let submitted = form.read().clone();
                            spawn(async move {
                                match profile::update(svc.api(), svc.session(), &submitted).await {
                                    Ok(done) => {
                                        form.write().password.clear();
                                        if let Some(fresh) = svc.session().user_info() {
                                            user.set(Some(fresh));
                                        }
                                        notice.set(Some(done));
                                    }
                                    Err(e) => notice.set(Some(profile::update_failure_notice(&e))),
                                }
                                busy.set(false);
                            });
                        }
                    },
                    if busy() { "Saving…" } else { "Save changes" }
                }
                NoticeLine { notice: notice() }
            }

            section { style: SECTION,
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    h3 { style: "margin: 0;", "My services" }
                    if is_provider {
                        button {
                            style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #1f6f5c; background: white; color: #1f6f5c;",
                            onclick: move |_| show_modal.set(true),
                            "Add Service"
                        }
                    }
                }
                {match &*services.read() {
                    LoadState::Loading => rsx! { p { style: "color: #888;", "Loading…" } },
                    LoadState::Failed(message) => rsx! { p { style: "color: #c0392b;", "{message}" } },
                    LoadState::Loaded(list) if list.is_empty() => rsx! {
                        p { style: "color: #aaa;", "You have not listed any services yet." }
                    },
                    LoadState::Loaded(list) => rsx! {
                        div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px; margin-top: 12px;",
                            for service in list.iter() {
                                ServiceCard { key: "{service.id}", service: service.clone() }
                            }
                        }
                    },
                }}
            }

            section { style: SECTION,
                h3 { style: "margin-top: 0;", "My reviews" }
                {match &*reviews.read() {
                    LoadState::Loading => rsx! { p { style: "color: #888;", "Loading…" } },
                    LoadState::Failed(message) => rsx! { p { style: "color: #c0392b;", "{message}" } },
                    LoadState::Loaded(list) if list.is_empty() => rsx! {
                        p { style: "color: #aaa;", "You have not reviewed anything yet." }
                    },
                    LoadState::Loaded(list) => rsx! {
                        for review in list.iter() {
                            {
                                let service_name = review.service_name().unwrap_or("Deleted service");
                                let stars = "★".repeat(usize::from(review.rating));
                                rsx! {
                                    div { key: "{review.id}", style: "padding: 10px 0; border-bottom: 1px solid #f0f0f0;",
                                        strong { "{service_name}" }
                                        span { style: "margin-left: 8px; color: #b7791f;", "{stars}" }
                                        if let Some(ref comment) = review.comment {
                                            p { style: "margin: 4px 0 0; color: #444;", "{comment}" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
            }

            if show_modal() {
                AddServiceModal {
                    on_close: move |_| show_modal.set(false),
                    on_service_added: refresh_services,
                }
            }
        }
    }
}
