// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Monodash Client: thin JSON-over-HTTP wrappers for Service A (users) and
// Service B (orders), plus the retry schedule the dashboard applies on top.
//
// The wrappers themselves never retry, time out, or cancel: all resilience
// lives in the caller.

pub mod http;
pub mod order_client;
pub mod resource;
pub mod retry;
pub mod user_client;

pub use order_client::OrderClient;
pub use resource::ResourceApi;
pub use user_client::UserClient;
