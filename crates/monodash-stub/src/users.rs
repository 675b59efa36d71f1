// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service A: user store.

use std::sync::Mutex;

use chrono::{DateTime, Local};
use monodash_core::types::{CreateUserRequest, ResourceKind, User};
use tracing::info;
use uuid::Uuid;

use crate::format;
use crate::routes::CollectionService;
use crate::validate::{self, ValidationError};

struct StoredUser {
    id: String,
    name: String,
    email: String,
    phone: String,
    created_at: DateTime<Local>,
    updated_at: DateTime<Local>,
}

impl StoredUser {
    fn to_response(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            created_at: format::timestamp(&self.created_at),
            updated_at: Some(format::timestamp(&self.updated_at)),
        }
    }
}

/// In-memory users, kept in insertion order.
#[derive(Default)]
pub struct UserService {
    users: Mutex<Vec<StoredUser>>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(request: &CreateUserRequest) -> Result<(), ValidationError> {
        if !validate::is_not_empty(&request.name) {
            return Err(ValidationError::Required("name"));
        }
        if !validate::is_valid_email(&request.email) {
            return Err(ValidationError::Format("email"));
        }
        if !validate::is_valid_phone(&request.phone) {
            return Err(ValidationError::Format("phone"));
        }
        Ok(())
    }
}

impl CollectionService for UserService {
    type Item = User;
    type Create = CreateUserRequest;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Users
    }

    fn list(&self) -> Vec<User> {
        match self.users.lock() {
            Ok(users) => users.iter().map(StoredUser::to_response).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn find(&self, id: &str) -> Option<User> {
        let users = self.users.lock().ok()?;
        users.iter().find(|u| u.id == id).map(StoredUser::to_response)
    }

    fn create(&self, request: CreateUserRequest) -> Result<User, ValidationError> {
        info!(email = %request.email, "creating user");
        Self::check(&request)?;

        let now = Local::now();
        let stored = StoredUser {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            created_at: now,
            updated_at: now,
        };
        let response = stored.to_response();
        if let Ok(mut users) = self.users.lock() {
            users.push(stored);
        }
        info!(id = %response.id, "user created");
        Ok(response)
    }
}
