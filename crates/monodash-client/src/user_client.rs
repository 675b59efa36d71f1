// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service A client: user management.

use std::future::Future;

use monodash_core::DashboardConfig;
use monodash_core::error::Result;
use monodash_core::types::{CreateUserRequest, ResourceKind, User};
use tracing::info;

use crate::http::ServiceHttp;
use crate::resource::ResourceApi;

/// Client for Service A.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: ServiceHttp,
}

impl UserClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: ServiceHttp::new(base_url, ResourceKind::Users)?,
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        Self::new(&config.service_a_url)
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetch every user.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users: Vec<User> = self.http.get_json("/api/users").await?;
        info!(count = users.len(), "fetched users");
        Ok(users)
    }

    /// Fetch a single user by id.
    pub async fn get_user(&self, id: &str) -> Result<User> {
        let path = format!("/api/users/{}", urlencoding::encode(id));
        self.http.get_json(&path).await
    }

    /// Create a user; returns the record as stored by the service.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        let user: User = self.http.post_json("/api/users", request).await?;
        info!(id = %user.id, "user created");
        Ok(user)
    }
}

impl ResourceApi for UserClient {
    type Item = User;
    type Create = CreateUserRequest;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Users
    }

    fn list(&self) -> impl Future<Output = Result<Vec<User>>> + Send {
        self.list_users()
    }

    fn get(&self, id: &str) -> impl Future<Output = Result<User>> + Send {
        self.get_user(id)
    }

    fn create(&self, request: &CreateUserRequest) -> impl Future<Output = Result<User>> + Send {
        self.create_user(request)
    }
}
