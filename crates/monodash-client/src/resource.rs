// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The seam between list components and the service clients.

use std::future::Future;

use monodash_core::error::Result;
use monodash_core::types::{Keyed, ResourceKind};
use serde::Serialize;

/// A REST collection the dashboard can list, look up, and append to.
///
/// Implemented by [`UserClient`](crate::UserClient) and
/// [`OrderClient`](crate::OrderClient); tests substitute in-memory fakes.
pub trait ResourceApi: Clone + Send + Sync + 'static {
    /// Entity returned by the service.
    type Item: Clone + PartialEq + Keyed + Send + Sync + 'static;
    /// Payload sent to create a new entity.
    type Create: Clone + Serialize + Send + Sync + 'static;

    fn kind(&self) -> ResourceKind;

    /// `GET /api/{plural}`.
    fn list(&self) -> impl Future<Output = Result<Vec<Self::Item>>> + Send;

    /// `GET /api/{plural}/{id}`.
    fn get(&self, id: &str) -> impl Future<Output = Result<Self::Item>> + Send;

    /// `POST /api/{plural}`.
    fn create(&self, request: &Self::Create) -> impl Future<Output = Result<Self::Item>> + Send;
}
