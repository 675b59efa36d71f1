// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// TCP accept loop for a stub service.
//
// One task accepts connections until the shutdown signal fires; each
// connection gets its own task that reads a single request, answers it, and
// closes. While the server is marked unavailable every request is answered
// with 503, which is how a service that is still booting looks to the
// dashboard.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use monodash_core::error::{MonodashError, Result};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::http::{self, HttpResponse};
use crate::routes::Routes;

/// State shared by the accept loop and every connection task.
struct Shared {
    routes: Arc<dyn Routes>,
    available: AtomicBool,
}

/// A running stub service.
pub struct StubServer {
    local_addr: SocketAddr,
    shared: Arc<Shared>,
    shutdown_signal: Arc<Notify>,
    task_handle: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Bind `addr` (port 0 picks a free port) and start serving `routes`.
    pub async fn start(addr: SocketAddr, routes: Arc<dyn Routes>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        info!(service = routes.name(), addr = %local_addr, "stub service listening");

        let shared = Arc::new(Shared {
            routes,
            available: AtomicBool::new(true),
        });
        let shutdown = Arc::new(Notify::new());

        let handle = tokio::spawn(Self::accept_loop(
            listener,
            Arc::clone(&shutdown),
            Arc::clone(&shared),
        ));

        Ok(Self {
            local_addr,
            shared,
            shutdown_signal: shutdown,
            task_handle: Some(handle),
        })
    }

    /// Start on `127.0.0.1` with an ephemeral port.
    pub async fn start_local(routes: Arc<dyn Routes>) -> Result<Self> {
        Self::start(SocketAddr::from(([127, 0, 0, 1], 0)), routes).await
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL a client should be configured with.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Toggle whether requests are served or answered with 503.
    pub fn set_available(&self, available: bool) {
        info!(
            service = self.shared.routes.name(),
            available, "stub availability changed"
        );
        self.shared.available.store(available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        self.shared.available.load(Ordering::SeqCst)
    }

    /// Answer 503 for `period`, then start serving.
    pub fn warm_up(&self, period: Duration) {
        if period.is_zero() {
            return;
        }
        self.set_available(false);
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            tokio::time::sleep(period).await;
            shared.available.store(true, Ordering::SeqCst);
            info!(service = shared.routes.name(), "stub service warmed up");
        });
    }

    /// Stop accepting connections and wait for the accept loop to exit.
    pub async fn stop(mut self) -> Result<()> {
        self.shutdown_signal.notify_one();
        if let Some(handle) = self.task_handle.take() {
            handle
                .await
                .map_err(|e| MonodashError::Config(format!("stub accept loop: {e}")))?;
        }
        info!(service = self.shared.routes.name(), "stub service stopped");
        Ok(())
    }

    async fn accept_loop(listener: TcpListener, shutdown: Arc<Notify>, shared: Arc<Shared>) {
        loop {
            tokio::select! {
                _ = shutdown.notified() => {
                    debug!(service = shared.routes.name(), "accept loop received shutdown signal");
                    break;
                }

                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            let state = Arc::clone(&shared);
                            tokio::spawn(async move {
                                if let Err(e) = Self::handle_connection(stream, peer, state).await {
                                    warn!(peer = %peer, error = %e, "connection handler error");
                                }
                            });
                        }
                        Err(e) => error!(error = %e, "failed to accept connection"),
                    }
                }
            }
        }
    }

    async fn handle_connection(
        mut stream: TcpStream,
        peer: SocketAddr,
        shared: Arc<Shared>,
    ) -> std::io::Result<()> {
        let response = match http::read_request(&mut stream).await {
            Ok(Some(request)) => {
                debug!(
                    peer = %peer,
                    method = %request.method,
                    path = %request.path,
                    "request"
                );
                if shared.available.load(Ordering::SeqCst) {
                    shared.routes.handle(&request)
                } else {
                    HttpResponse::empty(503)
                }
            }
            Ok(None) => return Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!(peer = %peer, error = %e, "malformed request");
                HttpResponse::empty(400)
            }
            Err(e) => return Err(e),
        };

        http::write_response(&mut stream, &response).await
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if self.task_handle.is_some() {
            self.shutdown_signal.notify_one();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::UserService;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    async fn raw_exchange(addr: SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut out = String::new();
        stream.read_to_string(&mut out).await.unwrap();
        out
    }

    #[tokio::test]
    async fn serves_and_stops() {
        let server = StubServer::start_local(Arc::new(UserService::new()))
            .await
            .unwrap();
        let reply = raw_exchange(
            server.local_addr(),
            "GET /api/users HTTP/1.1\r\nHost: test\r\n\r\n",
        )
        .await;
        assert!(reply.starts_with("HTTP/1.1 200 OK"));
        assert!(reply.ends_with("[]"));
        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn unavailable_answers_503() {
        let server = StubServer::start_local(Arc::new(UserService::new()))
            .await
            .unwrap();
        server.set_available(false);
        let reply = raw_exchange(
            server.local_addr(),
            "GET /api/users HTTP/1.1\r\nHost: test\r\n\r\n",
        )
        .await;
        assert!(reply.starts_with("HTTP/1.1 503 Service Unavailable"));

        server.set_available(true);
        assert!(server.is_available());
    }

    #[tokio::test]
    async fn warm_up_expires() {
        let server = StubServer::start_local(Arc::new(UserService::new()))
            .await
            .unwrap();
        server.warm_up(Duration::from_millis(20));
        assert!(!server.is_available());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(server.is_available());
    }

    #[tokio::test]
    async fn malformed_request_gets_400() {
        let server = StubServer::start_local(Arc::new(UserService::new()))
            .await
            .unwrap();
        let reply = raw_exchange(server.local_addr(), "NONSENSE\r\n\r\n").await;
        assert!(reply.starts_with("HTTP/1.1 400 Bad Request"));
    }
}
