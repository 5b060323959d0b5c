// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// reqwest implementation of the marketplace API.
//
// Endpoints (base URL from deployment configuration):
//   POST /auth/register        POST /auth/login
//   GET  /auth/profile         PUT  /auth/profile
//   GET  /services             POST /services
//   GET  /services/:id         GET  /services/user/:id
//   GET  /reviews/:id          GET  /reviews/user/:id
//   POST /reviews/add/:id

use neighborhelp_core::AppConfig;
use neighborhelp_core::error::{NeighborHelpError, Result};
use neighborhelp_core::types::{
    LoginRequest, NewReview, NewService, ProfileUpdate, RegisterRequest, Review, Service, Session,
    User,
};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::api::MarketplaceApi;

/// HTTP client bound to one API base URL.
///
/// Cheap to clone: reqwest's client is reference counted internally.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpApi {
    /// Build a client from configuration. Fails if no usable base URL is set.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let raw = config.base_url()?;
        let base_url = Url::parse(&raw)
            .map_err(|e| NeighborHelpError::Config(format!("invalid API base URL '{raw}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(NeighborHelpError::Config(format!(
                "API base URL '{raw}' cannot carry a path"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| NeighborHelpError::Transport(format!("HTTP client setup: {e}")))?;

        debug!(base_url = %base_url, "HTTP API client ready");
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL plus path segments, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                NeighborHelpError::Config("API base URL cannot carry a path".into())
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Send and fail on any non-2xx status.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| NeighborHelpError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        warn!(status = status.as_u16(), message = ?message, "API request rejected");
        Err(NeighborHelpError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| NeighborHelpError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| NeighborHelpError::Decode(e.to_string()))
    }

    /// A list endpoint; a `null` body counts as empty.
    async fn send_list<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Vec<T>> {
        let list: Option<Vec<T>> = self.send_json(request).await?;
        Ok(list.unwrap_or_default())
    }

    /// Send and discard the reply body.
    async fn send_unit(&self, request: RequestBuilder) -> Result<()> {
        self.send(request).await.map(drop)
    }

    async fn authenticate(&self, path: &str, body: &impl serde::Serialize) -> Result<Session> {
        let url = self.endpoint(&["auth", path])?;
        let reply: serde_json::Value = self.send_json(self.client.post(url).json(body)).await?;
        split_auth_reply(reply)
    }
}

impl MarketplaceApi for HttpApi {
    #[instrument(skip_all, fields(email = %request.email, role = %request.role))]
    async fn register(&self, request: &RegisterRequest) -> Result<Session> {
        self.authenticate("register", request).await
    }

    #[instrument(skip_all, fields(email = %request.email))]
    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        self.authenticate("login", request).await
    }

    #[instrument(skip_all)]
    async fn profile(&self, token: &str) -> Result<User> {
        let url = self.endpoint(&["auth", "profile"])?;
        self.send_json(self.client.get(url).bearer_auth(token)).await
    }

    #[instrument(skip_all, fields(user_id = %update.id))]
    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<Option<User>> {
        let url = self.endpoint(&["auth", "profile"])?;
        let response = self
            .send(self.client.put(url).bearer_auth(token).json(update))
            .await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| NeighborHelpError::Transport(e.to_string()))?;
        Ok(updated_user(&bytes))
    }

    #[instrument(skip_all)]
    async fn list_services(&self, token: &str) -> Result<Vec<Service>> {
        let url = self.endpoint(&["services"])?;
        self.send_list(self.client.get(url).bearer_auth(token)).await
    }

    #[instrument(skip_all, fields(service_name = %service.service_name))]
    async fn add_service(&self, token: &str, service: &NewService) -> Result<()> {
        let url = self.endpoint(&["services"])?;
        self.send_unit(self.client.post(url).bearer_auth(token).json(service))
            .await
    }

    #[instrument(skip(self))]
    async fn service(&self, service_id: &str) -> Result<Service> {
        let url = self.endpoint(&["services", service_id])?;
        self.send_json(self.client.get(url)).await
    }

    #[instrument(skip(self))]
    async fn services_by_user(&self, user_id: &str) -> Result<Vec<Service>> {
        let url = self.endpoint(&["services", "user", user_id])?;
        self.send_list(self.client.get(url)).await
    }

    #[instrument(skip(self))]
    async fn reviews_for_service(&self, service_id: &str) -> Result<Vec<Review>> {
        let url = self.endpoint(&["reviews", service_id])?;
        self.send_list(self.client.get(url)).await
    }

    #[instrument(skip(self))]
    async fn reviews_by_user(&self, user_id: &str) -> Result<Vec<Review>> {
        let url = self.endpoint(&["reviews", "user", user_id])?;
        self.send_list(self.client.get(url)).await
    }

    #[instrument(skip(self, token, review), fields(rating = review.rating.stars()))]
    async fn add_review(&self, token: &str, service_id: &str, review: &NewReview) -> Result<()> {
        let url = self.endpoint(&["reviews", "add", service_id])?;
        self.send_unit(self.client.post(url).bearer_auth(token).json(review))
            .await
    }
}

/// `message` (or `error`) from a JSON error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

/// The user echoed back by a profile update. The write already succeeded,
/// so an empty or unrecognised body just means "keep the cached user".
fn updated_user(body: &[u8]) -> Option<User> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(body)
        .inspect_err(|e| debug!(error = %e, "profile update reply is not a user"))
        .ok()
}

/// Split an auth reply into a session. The user is either flattened next to
/// the token (`{token, _id, name, ...}`) or nested under `user`.
fn split_auth_reply(mut reply: serde_json::Value) -> Result<Session> {
    let token = reply
        .get("token")
        .and_then(|t| t.as_str())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| NeighborHelpError::Decode("auth reply carried no token".into()))?;

    let user_value = match reply.get_mut("user") {
        Some(nested) if nested.is_object() => nested.take(),
        _ => reply,
    };
    let user: User = serde_json::from_value(user_value)
        .map_err(|e| NeighborHelpError::Decode(format!("auth reply user: {e}")))?;

    Ok(Session::new(token, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use neighborhelp_core::types::Role;
    use serde_json::json;

    fn api(base: &str) -> HttpApi {
        HttpApi::new(&AppConfig {
            api_base_url: Some(base.into()),
            ..Default::default()
        })
        .expect("client")
    }

    #[test]
    fn endpoints_join_under_base_path() {
        let api = api("http://localhost:5000/api/");
        assert_eq!(
            api.endpoint(&["services", "user", "64f1"])
                .expect("url")
                .as_str(),
            "http://localhost:5000/api/services/user/64f1"
        );

        let bare = self::api("https://market.example.com");
        assert_eq!(
            bare.endpoint(&["auth", "login"]).expect("url").as_str(),
            "https://market.example.com/auth/login"
        );
    }

    #[test]
    fn path_parameters_are_encoded() {
        let api = api("http://localhost");
        assert_eq!(
            api.endpoint(&["services", "a/b c"]).expect("url").as_str(),
            "http://localhost/services/a%2Fb%20c"
        );
    }

    #[test]
    fn missing_base_url_is_config_error() {
        let err = HttpApi::new(&AppConfig::default()).expect_err("no base url");
        assert!(matches!(err, NeighborHelpError::Config(_)));
    }

    #[test]
    fn error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(
            error_message(r#"{"error":"Service not found"}"#).as_deref(),
            Some("Service not found")
        );
        assert_eq!(error_message(r#"{"message":"  "}"#), None);
        assert_eq!(error_message("<html>502</html>"), None);
    }

    #[test]
    fn profile_update_reply_is_optional() {
        assert_eq!(updated_user(b""), None);
        assert_eq!(updated_user(b"  \n"), None);
        assert_eq!(updated_user(b"<html>ok</html>"), None);
        let user = updated_user(br#"{"_id":"u1","name":"Asha","email":"asha@example.com"}"#)
            .expect("user");
        assert_eq!(user.name, "Asha");
    }

    #[test]
    fn flat_auth_reply() {
        let session = split_auth_reply(json!({
            "_id": "u1", "name": "Asha", "email": "asha@example.com",
            "role": "provider", "token": "jwt-123"
        }))
        .expect("session");
        assert_eq!(session.token, "jwt-123");
        assert_eq!(session.user_info.id, "u1");
        assert_eq!(session.user_info.role, Role::Provider);
    }

    #[test]
    fn nested_auth_reply() {
        let session = split_auth_reply(json!({
            "token": "jwt-456",
            "user": { "_id": "u2", "email": "ravi@example.com" }
        }))
        .expect("session");
        assert_eq!(session.user_info.id, "u2");
    }

    #[test]
    fn auth_reply_without_token_rejected() {
        let err = split_auth_reply(json!({ "_id": "u1" })).expect_err("no token");
        assert!(matches!(err, NeighborHelpError::Decode(_)));
    }
}
