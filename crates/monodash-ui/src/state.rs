// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// State of one list component, independent of the UI toolkit.
//
// The Dioxus hook in `controller` owns a `Signal<ListState<T>>` and calls
// these transitions from event handlers and spawned tasks. Everything that
// decides *what* happens lives here; the hook only decides *when*.

use std::time::Duration;

use monodash_client::retry::{RetryDecision, should_retry};
use monodash_core::RetryPolicy;

/// A retry the component should schedule.
///
/// Compared by value: the hook re-arms its timer only when this changes,
/// which happens when the error text, the retry count, or the fetch cycle
/// moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRetry {
    /// Fetch cycle the retry belongs to. A timer for an older cycle is stale.
    pub cycle: u64,
    /// 1-based number of the retry about to be scheduled.
    pub attempt: u32,
    pub delay: Duration,
    /// Error text the retry was armed for.
    pub error: String,
}

/// What the component should draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    /// A fetch is in flight; nothing else is shown.
    Loading,
    Ready {
        error: Option<String>,
        form_visible: bool,
        items: Vec<T>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    retry_count: u32,
    form_visible: bool,
    cycle: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListState<T> {
    /// Freshly mounted: empty, loading, no error.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            retry_count: 0,
            form_visible: false,
            cycle: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    /// Sequence number of the most recent fetch cycle (0 before the first).
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Start a fetch cycle and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.cycle += 1;
        self.cycle
    }

    /// Replace the list wholesale and clear any failure state.
    ///
    /// Applied unconditionally: if two fetches race, whichever resolves last
    /// wins.
    pub fn fetch_succeeded(&mut self, items: Vec<T>) {
        self.items = items;
        self.error = None;
        self.retry_count = 0;
        self.loading = false;
    }

    /// Record a failed fetch. The previous list is kept.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Hide the form after a successful create. The caller resets the form
    /// fields and starts a new fetch cycle.
    pub fn create_succeeded(&mut self) {
        self.form_visible = false;
    }

    /// Record a failed create. Shares the error slot with fetch failures, so
    /// it also arms the retry loop against the list endpoint.
    pub fn create_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
    }

    /// The retry that should currently be scheduled, if any.
    pub fn pending_retry(&self, policy: &RetryPolicy) -> Option<PendingRetry> {
        if self.loading {
            return None;
        }
        let error = self.error.as_ref()?;
        match should_retry(self.retry_count, policy) {
            RetryDecision::RetryAfter(delay) => Some(PendingRetry {
                cycle: self.cycle,
                attempt: self.retry_count + 1,
                delay,
                error: error.clone(),
            }),
            RetryDecision::Exhausted => None,
        }
    }

    /// A retry timer armed during `armed_cycle` has fired.
    ///
    /// Returns `true` (and counts the retry) if the caller should start a
    /// fetch; `false` if the timer is stale because another cycle started or
    /// the error has since cleared.
    pub fn retry_fired(&mut self, armed_cycle: u64) -> bool {
        if armed_cycle != self.cycle || self.loading || self.error.is_none() {
            return false;
        }
        self.retry_count += 1;
        true
    }
}

impl<T: Clone> ListState<T> {
    pub fn view(&self) -> ListView<T> {
        if self.loading {
            ListView::Loading
        } else {
            ListView::Ready {
                error: self.error.clone(),
                form_visible: self.form_visible,
                items: self.items.clone(),
            }
        }
    }
}
