// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Runs in-memory Service A and Service B side by side until Ctrl-C.
//
//   SERVICE_A_PORT    (default 8081)
//   SERVICE_B_PORT    (default 8082)
//   STUB_WARMUP_SECS  answer 503 for this long after start (default 0)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use monodash_core::error::{MonodashError, Result};
use monodash_stub::{OrderService, StubServer, UserService};

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| MonodashError::Config(format!("{key} has an invalid value {raw:?}"))),
        Err(_) => Ok(default),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port_a: u16 = env_or("SERVICE_A_PORT", 8081)?;
    let port_b: u16 = env_or("SERVICE_B_PORT", 8082)?;
    let warmup = Duration::from_secs(env_or("STUB_WARMUP_SECS", 0u64)?);

    let users =
        StubServer::start(SocketAddr::from(([0, 0, 0, 0], port_a)), Arc::new(UserService::new()))
            .await?;
    let orders =
        StubServer::start(SocketAddr::from(([0, 0, 0, 0], port_b)), Arc::new(OrderService::new()))
            .await?;

    users.warm_up(warmup);
    orders.warm_up(warmup);

    tracing::info!(
        users = %users.base_url(),
        orders = %orders.base_url(),
        warmup_secs = warmup.as_secs(),
        "stub services running; press Ctrl-C to stop"
    );

    tokio::signal::ctrl_c().await?;

    users.stop().await?;
    orders.stop().await?;
    Ok(())
}
