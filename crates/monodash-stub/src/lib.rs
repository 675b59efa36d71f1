// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Monodash Stub: in-memory Service A (users) and Service B (orders).
//
// Speaks just enough HTTP/1.1 to serve the REST contract the dashboard
// consumes. Used by the client integration tests and for running the
// dashboard locally without the real services.

pub mod format;
pub mod http;
pub mod orders;
pub mod routes;
pub mod server;
pub mod users;
pub mod validate;

pub use orders::OrderService;
pub use server::StubServer;
pub use users::UserService;
