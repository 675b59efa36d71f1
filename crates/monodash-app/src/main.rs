// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Monodash desktop launcher.
//
// Initialises logging, resolves the service endpoints, and launches the
// Dioxus UI with the service clients in root context.

use monodash_core::config::{ENV_CONFIG_FILE, ENV_SERVICE_A_URL, ENV_SERVICE_B_URL};
use monodash_ui::{App, AppServices};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Monodash starting");

    let services = match AppServices::from_env() {
        Ok(services) => services,
        Err(e) => {
            tracing::error!(
                error = %e,
                "invalid configuration; check {ENV_CONFIG_FILE}, {ENV_SERVICE_A_URL} and {ENV_SERVICE_B_URL}"
            );
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new().with_context(services).launch(App);
}
