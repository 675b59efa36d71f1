// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Retry schedule for failed list fetches.
//
// Fixed spacing, no backoff, no jitter: a service that is still starting up
// gets polled every `delay` until `max_retries` is used up. Every failure
// counts; the dashboard does not distinguish transient from permanent ones.

use std::time::Duration;

use monodash_core::RetryPolicy;
use tracing::{debug, warn};

/// Result of evaluating whether to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Retry after this delay.
    RetryAfter(Duration),
    /// Maximum retries exhausted.
    Exhausted,
}

/// Decide whether another retry is due, given how many have already run.
pub fn should_retry(retries_so_far: u32, policy: &RetryPolicy) -> RetryDecision {
    if retries_so_far >= policy.max_retries {
        warn!(
            retries = retries_so_far,
            max = policy.max_retries,
            "retry limit exhausted"
        );
        RetryDecision::Exhausted
    } else {
        let delay = policy.delay();
        debug!(
            attempt = retries_so_far + 1,
            delay_ms = delay.as_millis() as u64,
            "scheduling retry"
        );
        RetryDecision::RetryAfter(delay)
    }
}
