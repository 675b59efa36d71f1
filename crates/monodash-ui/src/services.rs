// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer shared with every component through Dioxus context.

use monodash_client::{OrderClient, UserClient};
use monodash_core::DashboardConfig;
use monodash_core::error::Result;
use tracing::info;

/// Configuration plus one client per backend service, accessible from all
/// components via `use_context::<AppServices>()`.
///
/// Cheap to clone: the HTTP clients share their connection pools.
#[derive(Debug, Clone)]
pub struct AppServices {
    config: DashboardConfig,
    users: UserClient,
    orders: OrderClient,
}

impl AppServices {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let users = UserClient::from_config(&config)?;
        let orders = OrderClient::from_config(&config)?;
        info!(
            users = %users.base_url(),
            orders = %orders.base_url(),
            "service clients ready"
        );
        Ok(Self {
            config,
            users,
            orders,
        })
    }

    /// Build from `DashboardConfig::from_env`.
    pub fn from_env() -> Result<Self> {
        Self::new(DashboardConfig::from_env()?)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn users(&self) -> &UserClient {
        &self.users
    }

    pub fn orders(&self) -> &OrderClient {
        &self.orders
    }
}
