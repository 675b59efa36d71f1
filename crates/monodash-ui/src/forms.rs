// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Creation form values.
//
// Fields are held exactly as typed. Order quantity and price are only parsed
// when the form is submitted; a parse failure is reported like any other
// failed create.

use monodash_core::error::{MonodashError, Result};
use monodash_core::types::{CreateOrderRequest, CreateUserRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserForm {
    pub fn to_request(&self) -> Result<CreateUserRequest> {
        Ok(CreateUserRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub customer_id: String,
    pub product_name: String,
    pub quantity: String,
    pub unit_price: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            product_name: String::new(),
            quantity: "1".to_string(),
            unit_price: "0".to_string(),
        }
    }
}

impl OrderForm {
    pub fn to_request(&self) -> Result<CreateOrderRequest> {
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|e| MonodashError::InvalidInput {
                field: "quantity",
                reason: e.to_string(),
            })?;

        let unit_price = self
            .unit_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| MonodashError::InvalidInput {
                field: "unit price",
                reason: format!("{:?} is not a number", self.unit_price),
            })?;

        Ok(CreateOrderRequest {
            customer_id: self.customer_id.clone(),
            product_name: self.product_name.clone(),
            quantity,
            unit_price,
        })
    }
}
