// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the NeighborHelp marketplace.
//
// Records are owned by the remote API; the client only shapes payloads.
// Identifiers arrive as `_id` and are accepted as `id` too.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account type chosen at registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses services and leaves reviews.
    #[default]
    Consumer,
    /// Lists services.
    Provider,
}

impl Role {
    /// Wire keyword (`"consumer"` / `"provider"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consumer => "consumer",
            Self::Provider => "provider",
        }
    }

    /// Label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Consumer => "Consumer",
            Self::Provider => "Provider",
        }
    }

    /// Parse a wire keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "consumer" => Some(Self::Consumer),
            "provider" => Some(Self::Provider),
            _ => None,
        }
    }

    pub fn can_list_services(&self) -> bool {
        matches!(self, Self::Provider)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user. The password is write-only and never appears here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// A reference the API may return either populated or as a bare identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Populated<T> {
    Doc(T),
    Ref(String),
}

impl<T> Populated<T> {
    /// The populated document, if the API expanded the reference.
    pub fn doc(&self) -> Option<&T> {
        match self {
            Self::Doc(doc) => Some(doc),
            Self::Ref(_) => None,
        }
    }
}

/// Provider contact details embedded in a service record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
}

/// Opening hours as free-form strings (`"09:00"`, `"9am"` ...), not parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// A listed offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub working_hours: Option<WorkingHours>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub provider: Option<Populated<ProviderSummary>>,
    /// Server-computed average; never recomputed client-side.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<u32>,
}

impl Service {
    /// Provider details, when the API populated them.
    pub fn provider_details(&self) -> Option<&ProviderSummary> {
        self.provider.as_ref().and_then(Populated::doc)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedService {
    #[serde(default)]
    pub service_name: Option<String>,
}

/// A consumer's rating and optional comment on one service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Expected to be 1–5; the backend owns that invariant.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub user: Option<Populated<ReviewAuthor>>,
    #[serde(default)]
    pub service: Option<Populated<ReviewedService>>,
}

impl Review {
    pub fn author_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(Populated::doc)
            .and_then(|author| author.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service
            .as_ref()
            .and_then(Populated::doc)
            .and_then(|service| service.service_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// A star rating in the inclusive range 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// `None` for anything outside 1–5 (including 0, "nothing selected").
    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("rating {value} is outside 1-5"))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// The signed-in client state: bearer token plus the last-fetched user.
///
/// Replaced wholesale on every write, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_info: User,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, user_info: User) -> Self {
        Self {
            token: token.into(),
            user_info,
            saved_at: Utc::now(),
        }
    }
}

// -- Request payloads --------------------------------------------------------

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    pub role: Role,
}

/// Body of `PUT /auth/profile`. A full record: every field is always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Sent verbatim, including the empty string.
    pub password: String,
}

/// Body of `POST /services`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub service_name: String,
    pub description: String,
    pub contact_info: ContactInfo,
    pub working_hours: WorkingHours,
    pub service_type: String,
}

/// Body of `POST /reviews/add/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub rating: Rating,
    pub comment: String,
}
