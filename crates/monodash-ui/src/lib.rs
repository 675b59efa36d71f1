// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Monodash UI: Dioxus components for the user and order dashboards.
//
// Platform-neutral. The launcher crate picks the renderer and provides an
// `AppServices` as root context.

pub mod app;
pub mod components;
pub mod controller;
pub mod forms;
pub mod services;
pub mod state;

pub use app::App;
pub use components::{OrderList, OrderPanel, UserList, UserPanel};
pub use services::AppServices;
