// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service B: order store.
//
// Quantities and prices are kept numerically and only formatted on the way
// out, so the dashboard receives `"$12.50"` rather than `12.5`.

use std::sync::Mutex;

use chrono::{DateTime, Local};
use monodash_core::types::{CreateOrderRequest, Order, ResourceKind};
use tracing::info;
use uuid::Uuid;

use crate::format;
use crate::routes::CollectionService;
use crate::validate::{self, ValidationError};

/// Status assigned to every new order.
pub const INITIAL_STATUS: &str = "PENDING";

const ORDER_NUMBER_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

struct StoredOrder {
    id: String,
    order_number: String,
    customer_id: String,
    product_name: String,
    quantity: i64,
    unit_price: f64,
    total_amount: f64,
    created_at: DateTime<Local>,
    status: String,
}

impl StoredOrder {
    fn to_response(&self) -> Order {
        Order {
            id: self.id.clone(),
            order_number: self.order_number.clone(),
            customer_id: self.customer_id.clone(),
            product_name: self.product_name.clone(),
            quantity: format::number(self.quantity),
            unit_price: format::currency(self.unit_price),
            total_amount: format::currency(self.total_amount),
            status: self.status.clone(),
            created_at: format::timestamp(&self.created_at),
        }
    }
}

/// `ORD-` followed by eight characters from `A-Z0-9`.
pub fn order_number() -> String {
    let random = Uuid::new_v4();
    let suffix: String = random.as_bytes()[..8]
        .iter()
        .map(|b| ORDER_NUMBER_ALPHABET[*b as usize % ORDER_NUMBER_ALPHABET.len()] as char)
        .collect();
    format!("ORD-{suffix}")
}

/// In-memory orders, kept in insertion order.
#[derive(Default)]
pub struct OrderService {
    orders: Mutex<Vec<StoredOrder>>,
}

impl OrderService {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(request: &CreateOrderRequest) -> Result<(), ValidationError> {
        if !validate::is_not_empty(&request.customer_id) {
            return Err(ValidationError::Required("customer ID"));
        }
        if !validate::is_not_empty(&request.product_name) {
            return Err(ValidationError::Required("product name"));
        }
        if request.quantity <= 0 {
            return Err(ValidationError::NotPositive("quantity"));
        }
        if request.unit_price <= 0.0 || request.unit_price.is_nan() {
            return Err(ValidationError::NotPositive("unit price"));
        }
        Ok(())
    }
}

impl CollectionService for OrderService {
    type Item = Order;
    type Create = CreateOrderRequest;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Orders
    }

    fn list(&self) -> Vec<Order> {
        match self.orders.lock() {
            Ok(orders) => orders.iter().map(StoredOrder::to_response).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn find(&self, id: &str) -> Option<Order> {
        let orders = self.orders.lock().ok()?;
        orders.iter().find(|o| o.id == id).map(StoredOrder::to_response)
    }

    fn create(&self, request: CreateOrderRequest) -> Result<Order, ValidationError> {
        info!(customer = %request.customer_id, "creating order");
        Self::check(&request)?;

        let stored = StoredOrder {
            id: Uuid::new_v4().to_string(),
            order_number: order_number(),
            total_amount: request.quantity as f64 * request.unit_price,
            customer_id: request.customer_id,
            product_name: request.product_name,
            quantity: request.quantity,
            unit_price: request.unit_price,
            created_at: Local::now(),
            status: INITIAL_STATUS.to_string(),
        };
        let response = stored.to_response();
        if let Ok(mut orders) = self.orders.lock() {
            orders.push(stored);
        }
        info!(number = %response.order_number, "order created");
        Ok(response)
    }
}
