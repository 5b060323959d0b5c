// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Form state held by the UI and its mapping onto request payloads.
//
// Each form validates itself (see `validation`) and converts into the exact
// body the API expects. Field values are taken as typed; nothing is trimmed.

use crate::types::{
    ContactInfo, LoginRequest, NewReview, NewService, ProfileUpdate, Rating, RegisterRequest,
    Role, User, WorkingHours,
};
use crate::validation::{self, ValidationError};

/// Which half of the sign-in page is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Sign Up",
        }
    }

    /// Message shown after a successful submit, before the redirect.
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Login => "Login successful!",
            Self::Register => "Account created!",
        }
    }
}

/// The one form object shared by both sign-in modes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    pub role: Role,
}

impl AuthForm {
    /// Checks run in a fixed order; the first failure wins.
    pub fn validate(&self, mode: AuthMode) -> Result<(), ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if !validation::is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        validation::validate_password_length(&self.password)?;
        if mode == AuthMode::Register
            && !validation::all_present(&[&self.name, &self.phone, &self.address])
        {
            return Err(ValidationError::MissingRegistrationFields);
        }
        Ok(())
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}

/// The editable profile. `password` starts empty and means "new password".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
}

impl ProfileForm {
    /// Pre-populate from a fetched profile.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            address: user.address.clone().unwrap_or_default(),
            password: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_email(&self.email)?;
        if !self.password.is_empty() {
            validation::validate_password_length(&self.password)?;
        }
        if !validation::all_present(&[&self.name, &self.phone, &self.address]) {
            return Err(ValidationError::MissingProfileFields);
        }
        Ok(())
    }

    /// The full record, password included as typed (possibly empty).
    pub fn update_request(&self) -> ProfileUpdate {
        ProfileUpdate {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            password: self.password.clone(),
        }
    }
}

/// The add-service overlay. Flat here, nested in the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub service_name: String,
    pub service_type: String,
    pub description: String,
    pub contact_phone: String,
    pub working_start: String,
    pub working_end: String,
}

impl ServiceForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.service_name.is_empty() {
            return Err(ValidationError::MissingServiceName);
        }
        Ok(())
    }

    pub fn new_service(&self) -> NewService {
        NewService {
            service_name: self.service_name.clone(),
            description: self.description.clone(),
            contact_info: ContactInfo {
                phone: self.contact_phone.clone(),
            },
            working_hours: WorkingHours {
                start: self.working_start.clone(),
                end: self.working_end.clone(),
            },
            service_type: self.service_type.clone(),
        }
    }

    /// Inverse of [`new_service`](Self::new_service).
    pub fn from_new_service(service: &NewService) -> Self {
        Self {
            service_name: service.service_name.clone(),
            service_type: service.service_type.clone(),
            description: service.description.clone(),
            contact_phone: service.contact_info.phone.clone(),
            working_start: service.working_hours.start.clone(),
            working_end: service.working_hours.end.clone(),
        }
    }
}

/// Review composer state. `stars == 0` means nothing selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub stars: u8,
    pub comment: String,
}

impl ReviewDraft {
    pub fn review(&self) -> Result<NewReview, ValidationError> {
        let rating = Rating::new(self.stars).ok_or(ValidationError::MissingRating)?;
        Ok(NewReview {
            rating,
            comment: self.comment.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.stars = 0;
        self.comment.clear();
    }
}
