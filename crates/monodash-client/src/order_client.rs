// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service B client: order management.

use std::future::Future;

use monodash_core::DashboardConfig;
use monodash_core::error::Result;
use monodash_core::types::{CreateOrderRequest, Order, ResourceKind};
use tracing::info;

use crate::http::ServiceHttp;
use crate::resource::ResourceApi;

/// Client for Service B.
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: ServiceHttp,
}

impl OrderClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: ServiceHttp::new(base_url, ResourceKind::Orders)?,
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        Self::new(&config.service_b_url)
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        let orders: Vec<Order> = self.http.get_json("/api/orders").await?;
        info!(count = orders.len(), "fetched orders");
        Ok(orders)
    }

    pub async fn get_order(&self, id: &str) -> Result<Order> {
        let path = format!("/api/orders/{}", urlencoding::encode(id));
        self.http.get_json(&path).await
    }

    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order> {
        let order: Order = self.http.post_json("/api/orders", request).await?;
        info!(id = %order.id, number = %order.order_number, "order created");
        Ok(order)
    }
}

impl ResourceApi for OrderClient {
    type Item = Order;
    type Create = CreateOrderRequest;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Orders
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Order>>> + Send {
        self.list_orders()
    }

    fn get(&self, id: &str) -> impl Future<Output = Result<Order>> + Send {
        self.get_order(id)
    }

    fn create(&self, request: &CreateOrderRequest) -> impl Future<Output = Result<Order>> + Send {
        self.create_order(request)
    }
}
