// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service profile: one service, its reviews, and the review composer.

use dioxus::prelude::*;
use neighborhelp_client::flows::service_profile::{self as flow, ReviewSubmit};
use neighborhelp_core::forms::ReviewDraft;
use neighborhelp_core::human_errors::Notice;
use neighborhelp_core::types::{Rating, Review, Service};
use neighborhelp_core::{LoadState, RequestGeneration, display};

use crate::components::notice::NoticeLine;
use crate::services::app_services::AppServices;

const SECTION: &str = "margin: 16px 0; padding: 20px; border-radius: 12px; background: white; border: 1px solid #e0e0e0;";

#[component]
pub fn ServiceProfile(service_id: String) -> Element {
    let svc = use_context::<AppServices>();
    let service_generation = use_hook(RequestGeneration::new);
    let review_generation = use_hook(RequestGeneration::new);
    let mut service = use_signal(LoadState::<Service>::default);
    let mut reviews = use_signal(LoadState::<Vec<Review>>::default);
    let mut draft = use_signal(ReviewDraft::default);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut busy = use_signal(|| false);

    // Both fetches restart when the path parameter changes. Completions from
    // an older id are dropped.
    use_effect(use_reactive((&service_id,), {
        let svc = svc.clone();
        let service_generation = service_generation.clone();
        let review_generation = review_generation.clone();
        move |(id,)| {
            let service_ticket = service_generation.begin();
            let review_ticket = review_generation.begin();
            service.set(LoadState::Loading);
            reviews.set(LoadState::Loading);
            draft.set(ReviewDraft::default());
            notice.set(None);

            let (svc_a, generation_a, id_a) = (svc.clone(), service_generation.clone(), id.clone());
            spawn(async move {
                let loaded = flow::load_service(svc_a.api(), &id_a).await;
                if generation_a.is_current(service_ticket) {
                    service.set(loaded);
                } else {
                    tracing::debug!(service_id = %id_a, "dropping stale service load");
                }
            });

            let (svc_b, generation_b) = (svc.clone(), review_generation.clone());
            spawn(async move {
                let loaded = flow::load_reviews(svc_b.api(), &id).await;
                if generation_b.is_current(review_ticket) {
                    reviews.set(loaded);
                } else {
                    tracing::debug!(service_id = %id, "dropping stale review load");
                }
            });
        }
    }));

    use_drop({
        let service_generation = service_generation.clone();
        let review_generation = review_generation.clone();
        move || {
            service_generation.invalidate();
            review_generation.invalidate();
        }
    });

    let details = match &*service.read() {
        LoadState::Loading => rsx! {
            p { style: "color: #888; text-align: center; margin: 48px 0;", "Loading service…" }
        },
        LoadState::Failed(message) => rsx! {
            p { style: "color: #c0392b; text-align: center; margin: 48px 0;", "{message}" }
        },
        LoadState::Loaded(service) => rsx! { ServiceDetails { service: service.clone() } },
    };

    let review_list = match &*reviews.read() {
        LoadState::Loading => rsx! { p { style: "color: #888;", "Loading reviews…" } },
        LoadState::Failed(message) => rsx! { p { style: "color: #c0392b;", "{message}" } },
        LoadState::Loaded(list) if list.is_empty() => rsx! {
            p { style: "color: #aaa;", "{flow::NO_REVIEWS}" }
        },
        LoadState::Loaded(list) => rsx! {
            for review in list.iter() {
                ReviewItem { key: "{review.id}", review: review.clone() }
            }
        },
    };

    let selected = draft.read().stars;

    rsx! {
        div {
            {details}

            section { style: SECTION,
                h3 { style: "margin-top: 0;", "Leave a review" }
                div { style: "display: flex; gap: 4px;",
                    for stars in Rating::MIN..=Rating::MAX {
                        button {
                            key: "{stars}",
                            style: "border: none; background: none; cursor: pointer; padding: 0;",
                            onclick: move |_| draft.write().stars = stars,
                            Star { filled: stars <= selected, size: 28 }
                        }
                    }
                }
                textarea {
                    style: "width: 100%; padding: 8px; margin: 8px 0; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box;",
                    rows: "3",
                    placeholder: "Share your experience (optional)",
                    value: "{draft.read().comment}",
                    oninput: move |evt| draft.write().comment = evt.value(),
                }
                button {
                    style: "padding: 10px 20px; border-radius: 8px; border: none; background: #1f6f5c; color: white; font-size: 15px;",
                    disabled: busy(),
                    onclick: {
                        let svc = svc.clone();
                        let generation = review_generation.clone();
                        let service_id = service_id.clone();
                        move |_| {
                            if busy() {
                                return;
                            }
                            busy.set(true);
                            notice.set(None);
                            let svc = svc.clone();
                            let generation = generation.clone();
                            let service_id = service_id.clone();
                            let submitted = draft.read().clone();
                            spawn(async move {
                                let outcome = flow::submit_review_under(
                                    svc.api(),
                                    svc.session(),
                                    &service_id,
                                    &submitted,
                                    &generation,
                                )
                                .await;
                                match outcome {
                                    ReviewSubmit::Posted(refreshed) => {
                                        reviews.set(refreshed);
                                        draft.write().clear();
                                    }
                                    ReviewSubmit::Rejected(failure) => notice.set(Some(failure)),
                                    ReviewSubmit::Stale => {}
                                }
                                busy.set(false);
                            });
                        }
                    },
                    if busy() { "Submitting…" } else { "Submit Review" }
                }
                NoticeLine { notice: notice() }
            }

            section { style: SECTION,
                h3 { style: "margin-top: 0;", "Reviews" }
                {review_list}
            }
        }
    }
}

#[component]
fn ServiceDetails(service: Service) -> Element {
    let initial = display::initial(&service.service_name);
    let rating = display::profile_rating(&service);
    let reviews = display::review_count_label(&service);
    let kind = service.service_type.clone().unwrap_or_default();
    let description = display::description(&service);

    rsx! {
        section { style: SECTION,
            div { style: "display: flex; gap: 16px; align-items: center;",
                div { style: "width: 64px; height: 64px; border-radius: 50%; background: #1f6f5c; color: white; display: flex; align-items: center; justify-content: center; font-size: 28px; font-weight: bold;",
                    "{initial}"
                }
                div {
                    h1 { style: "margin: 0;", "{service.service_name}" }
                    if !kind.is_empty() {
                        p { style: "margin: 2px 0 0; color: #1f6f5c;", "{kind}" }
                    }
                    p { style: "margin: 4px 0 0; color: #b7791f;", "★ {rating} {reviews}" }
                }
            }
            p { style: "color: #444;", "{description}" }
            table { style: "font-size: 14px; color: #444; border-spacing: 0 6px;",
                DetailRow { label: "Provider", value: display::provider_name(&service).to_string() }
                DetailRow { label: "Email", value: display::provider_email(&service).to_string() }
                DetailRow { label: "Phone", value: display::provider_phone(&service).to_string() }
                DetailRow { label: "Hours", value: display::working_hours(&service) }
            }
        }
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> Element {
    rsx! {
        tr {
            td { style: "color: #888; padding-right: 16px;", "{label}" }
            td { "{value}" }
        }
    }
}

#[component]
fn ReviewItem(review: Review) -> Element {
    let author = display::review_author(&review);
    let stars = display::stars(review.rating);
    rsx! {
        div { style: "padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            div { style: "display: flex; justify-content: space-between;",
                strong { "{author}" }
                span {
                    for (i, filled) in stars.into_iter().enumerate() {
                        Star { key: "{i}", filled, size: 16 }
                    }
                }
            }
            if let Some(ref comment) = review.comment {
                if !comment.is_empty() {
                    p { style: "margin: 6px 0 0; color: #444;", "{comment}" }
                }
            }
        }
    }
}

#[component]
fn Star(filled: bool, size: u8) -> Element {
    let colour = if filled { "#f5a623" } else { "#d0d0d0" };
    rsx! {
        span { style: "color: {colour}; font-size: {size}px;", "★" }
    }
}
