// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Monodash.

use thiserror::Error;

use crate::types::ResourceKind;

/// Top-level error type for all Monodash operations.
///
/// Service failures carry no HTTP status or server message; the
/// dashboard only ever shows one of two fixed banners.
#[derive(Debug, Error)]
pub enum MonodashError {
    // -- Service calls --
    #[error("failed to fetch {0}")]
    FetchFailed(ResourceKind),

    #[error("failed to create {}", .0.singular())]
    CreateFailed(ResourceKind),

    #[error("could not reach {kind} service: {detail}")]
    Transport { kind: ResourceKind, detail: String },

    #[error("unexpected response body from {kind} service: {detail}")]
    Decode { kind: ResourceKind, detail: String },

    // -- Forms --
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MonodashError>;
