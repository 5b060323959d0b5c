// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text formatting for service cards, the service profile, and review lists.

use crate::types::{Review, Service};

/// Large letter shown on a service card.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// One decimal place with halves rounded away from zero, or `missing` when
/// the service has no rating yet.
pub fn rating_label(rating: Option<f64>, missing: &str) -> String {
    match rating {
        Some(r) if r > 0.0 => {
            let rounded = (r * 10.0).round() / 10.0;
            format!("{rounded:.1}")
        }
        _ => missing.to_string(),
    }
}

/// Rating on a service card.
pub fn card_rating(service: &Service) -> String {
    rating_label(service.rating, "N/A")
}

/// Rating in the service profile header.
pub fn profile_rating(service: &Service) -> String {
    rating_label(service.rating, "0.0")
}

pub fn review_count_label(service: &Service) -> String {
    let count = service.total_reviews.unwrap_or(0);
    if count == 1 {
        "(1 review)".into()
    } else {
        format!("({count} reviews)")
    }
}

pub fn description(service: &Service) -> &str {
    service
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or("No description provided")
}

pub fn working_hours(service: &Service) -> String {
    match &service.working_hours {
        Some(hours) if !hours.start.is_empty() => format!("{} - {}", hours.start, hours.end),
        _ => "Flexible hours".into(),
    }
}

/// Provider name for a card: the flattened `providerName`, then the
/// populated provider record.
pub fn provider_name(service: &Service) -> &str {
    service
        .provider_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .or_else(|| {
            service
                .provider_details()
                .and_then(|p| p.name.as_deref())
                .filter(|n| !n.is_empty())
        })
        .unwrap_or("N/A")
}

pub fn provider_email(service: &Service) -> &str {
    service
        .provider_details()
        .and_then(|p| p.email.as_deref())
        .filter(|e| !e.is_empty())
        .unwrap_or("Not provided")
}

/// The provider's own phone, falling back to the service contact phone.
pub fn provider_phone(service: &Service) -> &str {
    service
        .provider_details()
        .and_then(|p| p.phone.as_deref())
        .filter(|p| !p.is_empty())
        .or_else(|| {
            service
                .contact_info
                .as_ref()
                .map(|c| c.phone.as_str())
                .filter(|p| !p.is_empty())
        })
        .unwrap_or("Not provided")
}

pub fn review_author(review: &Review) -> &str {
    review.author_name().unwrap_or("Anonymous")
}

/// Filled/empty flags for five stars.
pub fn stars(filled: u8) -> [bool; 5] {
    std::array::from_fn(|i| i < usize::from(filled))
}
