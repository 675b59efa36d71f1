// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Monodash dashboard.
//
// Entity fields are kept as the opaque strings the services send. Numeric
// order fields arrive pre-formatted ("$12.50") and are never parsed here.

use serde::{Deserialize, Serialize};

/// The two kinds of record the dashboard manages, one per backend service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Users, served by Service A.
    Users,
    /// Orders, served by Service B.
    Orders,
}

impl ResourceKind {
    /// Name of the backend service that owns this resource.
    pub fn service_label(&self) -> &'static str {
        match self {
            Self::Users => "Service A",
            Self::Orders => "Service B",
        }
    }

    /// Plural noun, also the last segment of the collection path.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Orders => "orders",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Users => "user",
            Self::Orders => "order",
        }
    }

    /// Collection path relative to the service base URL.
    pub fn collection_path(&self) -> String {
        format!("/api/{}", self.plural())
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.plural())
    }
}

/// A user record as returned by Service A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: String,
    /// Service A also reports the last modification time; the dashboard
    /// does not display it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// An order record as returned by Service B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_id: String,
    pub product_name: String,
    pub quantity: String,
    pub unit_price: String,
    pub total_amount: String,
    pub status: String,
    pub created_at: String,
}

/// Payload for `POST /api/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Payload for `POST /api/orders`. Quantity and price travel as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
}

/// Anything the dashboard lists: it needs a stable key for rendering.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Order {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_uses_camel_case_and_tolerates_updated_at() {
        let json = r#"{
            "id": "u-1",
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "+4420",
            "createdAt": "2026-01-02 03:04:05",
            "updatedAt": "2026-01-02 03:04:05"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.created_at, "2026-01-02 03:04:05");
        assert_eq!(user.updated_at.as_deref(), Some("2026-01-02 03:04:05"));
    }

    #[test]
    fn user_without_updated_at_still_parses() {
        let json = r#"{"id":"u","name":"n","email":"e","phone":"p","createdAt":"c"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.updated_at, None);
        assert_eq!(user.key(), "u");
    }

    #[test]
    fn order_fields_stay_opaque_strings() {
        let json = r#"{
            "id": "o-1",
            "orderNumber": "ORD-AB12CD34",
            "customerId": "c-9",
            "productName": "Widget",
            "quantity": "1,000",
            "unitPrice": "$2.50",
            "totalAmount": "$2,500.00",
            "status": "PENDING",
            "createdAt": "2026-01-02 03:04:05"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.quantity, "1,000");
        assert_eq!(order.total_amount, "$2,500.00");
    }

    #[test]
    fn create_order_sends_numbers() {
        let req = CreateOrderRequest {
            customer_id: "c-1".into(),
            product_name: "Widget".into(),
            quantity: 3,
            unit_price: 9.99,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["customerId"], "c-1");
        assert_eq!(value["quantity"], 3);
        assert_eq!(value["unitPrice"], 9.99);
    }

    #[test]
    fn resource_paths() {
        assert_eq!(ResourceKind::Users.collection_path(), "/api/users");
        assert_eq!(ResourceKind::Orders.collection_path(), "/api/orders");
        assert_eq!(ResourceKind::Orders.service_label(), "Service B");
    }
}
