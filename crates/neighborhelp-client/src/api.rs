// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The marketplace API as the client sees it: one method per endpoint.
//
// Methods that need a session take the bearer token explicitly; callers get
// it from the injected `SessionStore`, never from ambient state.

use std::future::Future;

use neighborhelp_core::error::Result;
use neighborhelp_core::types::{
    LoginRequest, NewReview, NewService, ProfileUpdate, RegisterRequest, Review, Service, Session,
    User,
};

/// Remote collaborator that owns users, services, reviews, and ratings.
pub trait MarketplaceApi: Send + Sync {
    /// `POST /auth/register`; the `{token, ...user}` reply split into a session.
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = Result<Session>> + Send;

    /// `POST /auth/login`.
    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<Session>> + Send;

    /// `GET /auth/profile` (bearer).
    fn profile(&self, token: &str) -> impl Future<Output = Result<User>> + Send;

    /// `PUT /auth/profile` (bearer). Returns the updated user when the reply
    /// body is a user record.
    fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<Option<User>>> + Send;

    /// `GET /services` (bearer).
    fn list_services(&self, token: &str) -> impl Future<Output = Result<Vec<Service>>> + Send;

    /// `POST /services` (bearer). The created record is not consumed; callers
    /// re-fetch the list they display.
    fn add_service(
        &self,
        token: &str,
        service: &NewService,
    ) -> impl Future<Output = Result<()>> + Send;

    /// `GET /services/:id`.
    fn service(&self, service_id: &str) -> impl Future<Output = Result<Service>> + Send;

    /// `GET /services/user/:id`.
    fn services_by_user(&self, user_id: &str)
    -> impl Future<Output = Result<Vec<Service>>> + Send;

    /// `GET /reviews/:id`.
    fn reviews_for_service(
        &self,
        service_id: &str,
    ) -> impl Future<Output = Result<Vec<Review>>> + Send;

    /// `GET /reviews/user/:id`.
    fn reviews_by_user(&self, user_id: &str) -> impl Future<Output = Result<Vec<Review>>> + Send;

    /// `POST /reviews/add/:id` (bearer). The reply is not consumed; callers
    /// re-fetch the review list.
    fn add_review(
        &self,
        token: &str,
        service_id: &str,
        review: &NewReview,
    ) -> impl Future<Output = Result<()>> + Send;
}
