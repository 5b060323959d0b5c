// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory marketplace for flow tests. Records every call by endpoint name
// and behaves like the real backend closely enough for re-fetch checks.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use neighborhelp_core::error::{NeighborHelpError, Result};
use neighborhelp_core::types::{
    LoginRequest, NewReview, NewService, Populated, ProfileUpdate, RegisterRequest, Review,
    ReviewAuthor, Role, Service, Session, User,
};

use crate::api::MarketplaceApi;

pub(crate) const TOKEN: &str = "tok-fake";

pub(crate) struct FakeApi {
    state: Mutex<FakeState>,
}

pub(crate) struct FakeState {
    pub calls: Vec<&'static str>,
    /// Endpoint name → server message (or none) to fail with.
    pub failures: HashMap<&'static str, Option<String>>,
    pub user: User,
    pub services: Vec<Service>,
    pub reviews: HashMap<String, Vec<Review>>,
    pub last_update: Option<ProfileUpdate>,
    pub last_register: Option<RegisterRequest>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                calls: Vec::new(),
                failures: HashMap::new(),
                user: User {
                    id: "u1".into(),
                    name: "Ravi".into(),
                    email: "ravi@example.com".into(),
                    phone: Some("555-0100".into()),
                    address: Some("4 Market Rd".into()),
                    role: Role::Provider,
                },
                services: Vec::new(),
                reviews: HashMap::new(),
                last_update: None,
                last_register: None,
            }),
        }
    }

    pub fn with_service(self, id: &str, name: &str) -> Self {
        self.state().services.push(Service {
            id: id.into(),
            service_name: name.into(),
            provider_name: Some("Ravi".into()),
            ..Default::default()
        });
        self
    }

    pub fn fail(&self, endpoint: &'static str, message: Option<&str>) {
        self.state()
            .failures
            .insert(endpoint, message.map(str::to_string));
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake state poisoned")
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state().calls.clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.state().calls.iter().filter(|c| **c == endpoint).count()
    }

    fn enter(&self, endpoint: &'static str, token: Option<&str>) -> Result<MutexGuard<'_, FakeState>> {
        let mut state = self.state();
        state.calls.push(endpoint);
        if let Some(message) = state.failures.get(endpoint) {
            return Err(NeighborHelpError::Api {
                status: 500,
                message: message.clone(),
            });
        }
        if let Some(token) = token
            && token != TOKEN
        {
            return Err(NeighborHelpError::Api {
                status: 401,
                message: Some("Not authorized, token failed".into()),
            });
        }
        Ok(state)
    }
}

impl MarketplaceApi for FakeApi {
    async fn register(&self, request: &RegisterRequest) -> Result<Session> {
        let mut state = self.enter("register", None)?;
        state.last_register = Some(request.clone());
        state.user = User {
            id: "u-new".into(),
            name: request.name.clone(),
            email: request.email.clone(),
            phone: Some(request.phone.clone()),
            address: Some(request.address.clone()),
            role: request.role,
        };
        Ok(Session::new(TOKEN, state.user.clone()))
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        let state = self.enter("login", None)?;
        if request.email != state.user.email {
            return Err(NeighborHelpError::Api {
                status: 401,
                message: Some("Invalid email or password".into()),
            });
        }
        Ok(Session::new(TOKEN, state.user.clone()))
    }

    async fn profile(&self, token: &str) -> Result<User> {
        let state = self.enter("profile", Some(token))?;
        Ok(state.user.clone())
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<Option<User>> {
        let mut state = self.enter("update_profile", Some(token))?;
        state.last_update = Some(update.clone());
        state.user.name = update.name.clone();
        state.user.email = update.email.clone();
        state.user.phone = Some(update.phone.clone());
        state.user.address = Some(update.address.clone());
        Ok(Some(state.user.clone()))
    }

    async fn list_services(&self, token: &str) -> Result<Vec<Service>> {
        let state = self.enter("list_services", Some(token))?;
        Ok(state.services.clone())
    }

    async fn add_service(&self, token: &str, service: &NewService) -> Result<()> {
        let mut state = self.enter("add_service", Some(token))?;
        let id = format!("s{}", state.services.len() + 1);
        let provider_name = state.user.name.clone();
        state.services.push(Service {
            id,
            service_name: service.service_name.clone(),
            description: Some(service.description.clone()),
            contact_info: Some(service.contact_info.clone()),
            working_hours: Some(service.working_hours.clone()),
            service_type: Some(service.service_type.clone()),
            provider_name: Some(provider_name),
            ..Default::default()
        });
        Ok(())
    }

    async fn service(&self, service_id: &str) -> Result<Service> {
        let state = self.enter("service", None)?;
        state
            .services
            .iter()
            .find(|s| s.id == service_id)
            .cloned()
            .ok_or(NeighborHelpError::Api {
                status: 404,
                message: Some("Service not found".into()),
            })
    }

    async fn services_by_user(&self, user_id: &str) -> Result<Vec<Service>> {
        let state = self.enter("services_by_user", None)?;
        if user_id != state.user.id {
            return Ok(Vec::new());
        }
        Ok(state.services.clone())
    }

    async fn reviews_for_service(&self, service_id: &str) -> Result<Vec<Review>> {
        let state = self.enter("reviews_for_service", None)?;
        Ok(state.reviews.get(service_id).cloned().unwrap_or_default())
    }

    async fn reviews_by_user(&self, user_id: &str) -> Result<Vec<Review>> {
        let state = self.enter("reviews_by_user", None)?;
        let name = state.user.name.clone();
        if user_id != state.user.id {
            return Ok(Vec::new());
        }
        Ok(state
            .reviews
            .values()
            .flatten()
            .filter(|r| r.author_name() == Some(name.as_str()))
            .cloned()
            .collect())
    }

    async fn add_review(&self, token: &str, service_id: &str, review: &NewReview) -> Result<()> {
        let mut state = self.enter("add_review", Some(token))?;
        let author = state.user.name.clone();
        let list = state.reviews.entry(service_id.to_string()).or_default();
        list.push(Review {
            id: format!("r{}", list.len() + 1),
            rating: review.rating.stars(),
            comment: Some(review.comment.clone()),
            user: Some(Populated::Doc(ReviewAuthor { name: Some(author) })),
            service: None,
        });
        Ok(())
    }
}
