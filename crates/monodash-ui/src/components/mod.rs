// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod common;
pub mod order_list;
pub mod user_list;

pub use order_list::{OrderList, OrderPanel};
pub use user_list::{UserList, UserPanel};
