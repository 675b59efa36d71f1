// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request dispatch shared by both services.
//
// Each service exposes one collection under `/api/{plural}` with list,
// lookup, and create. Status codes follow the real services: 201 on create,
// 400 with an empty body on bad input, 404 for unknown ids.

use monodash_core::types::ResourceKind;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::http::{HttpRequest, HttpResponse};
use crate::validate::ValidationError;

/// Something the server can hand requests to.
pub trait Routes: Send + Sync + 'static {
    /// Short name used in log fields.
    fn name(&self) -> &'static str;

    fn handle(&self, request: &HttpRequest) -> HttpResponse;
}

/// An in-memory REST collection.
pub trait CollectionService: Send + Sync + 'static {
    type Item: Serialize;
    type Create: DeserializeOwned;

    fn kind(&self) -> ResourceKind;

    fn list(&self) -> Vec<Self::Item>;

    fn find(&self, id: &str) -> Option<Self::Item>;

    fn create(&self, request: Self::Create) -> Result<Self::Item, ValidationError>;
}

/// Which part of a collection a path addresses.
#[derive(Debug, PartialEq, Eq)]
pub enum Target {
    Collection,
    Item(String),
    Unknown,
}

/// Resolve `path` against the collection rooted at `root` (e.g. `/api/users`).
pub fn resolve(path: &str, root: &str) -> Target {
    let Some(rest) = path.strip_prefix(root) else {
        return Target::Unknown;
    };
    match rest.trim_end_matches('/') {
        "" => Target::Collection,
        tail => match tail.strip_prefix('/') {
            Some(id) if !id.is_empty() && !id.contains('/') => {
                match urlencoding::decode(id) {
                    Ok(decoded) => Target::Item(decoded.into_owned()),
                    Err(_) => Target::Unknown,
                }
            }
            _ => Target::Unknown,
        },
    }
}

impl<S: CollectionService> Routes for S {
    fn name(&self) -> &'static str {
        self.kind().service_label()
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let kind = self.kind();
        let root = kind.collection_path();

        match (request.method.as_str(), resolve(&request.path, &root)) {
            ("GET", Target::Collection) => {
                let items = self.list();
                debug!(kind = %kind, count = items.len(), "listing");
                HttpResponse::json(200, &items)
            }
            ("GET", Target::Item(id)) => match self.find(&id) {
                Some(item) => HttpResponse::json(200, &item),
                None => {
                    debug!(kind = %kind, id = %id, "not found");
                    HttpResponse::empty(404)
                }
            },
            ("POST", Target::Collection) => {
                let payload: S::Create = match serde_json::from_slice(&request.body) {
                    Ok(p) => p,
                    Err(e) => {
                        warn!(kind = %kind, error = %e, "malformed create payload");
                        return HttpResponse::empty(400);
                    }
                };
                match self.create(payload) {
                    Ok(item) => HttpResponse::json(201, &item),
                    Err(e) => {
                        info!(kind = %kind, reason = %e, "create rejected");
                        HttpResponse::empty(400)
                    }
                }
            }
            (_, Target::Unknown) => HttpResponse::empty(404),
            _ => HttpResponse::empty(405),
        }
    }
}
