// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dioxus hook driving a `ListState` against a `ResourceApi`.
//
// One fetch runs on mount. Failures arm a single retry timer; the timer is
// re-armed whenever the pending retry changes and cancelled when a manual
// fetch starts or the component unmounts (tasks die with their scope).

use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::{debug, info, warn};

use monodash_client::ResourceApi;
use monodash_core::error::Result;
use monodash_core::messages;
use monodash_core::types::{Keyed, ResourceKind};
use monodash_core::RetryPolicy;

use crate::state::{ListState, ListView, PendingRetry};

/// Handle returned by [`use_list_controller`]. Cheap to clone into event
/// handlers: everything except the API client is a `Copy` signal.
#[derive(Clone)]
pub struct ListController<A: ResourceApi> {
    api: A,
    state: Signal<ListState<A::Item>>,
    retry_task: Signal<Option<Task>>,
}

impl<A: ResourceApi> ListController<A> {
    pub fn kind(&self) -> ResourceKind {
        self.api.kind()
    }

    pub fn state(&self) -> Signal<ListState<A::Item>> {
        self.state
    }

    /// Snapshot for rendering. Subscribes the caller to state changes.
    pub fn view(&self) -> ListView<A::Item> {
        self.state.read().view()
    }

    /// Start a new fetch cycle, dropping any scheduled retry.
    pub fn fetch(&self) {
        self.cancel_retry();
        self.start_fetch();
    }

    pub fn toggle_form(&self) {
        let mut state = self.state;
        state.write().toggle_form();
    }

    /// Submit a create request built from `form`.
    ///
    /// On success the form is reset to its default, hidden, and the list is
    /// refetched. Any failure, including a request that could not be built,
    /// surfaces as the generic create-failed message with the form untouched.
    pub fn submit<F: Default + 'static>(&self, request: Result<A::Create>, mut form: Signal<F>) {
        let kind = self.kind();
        let mut state = self.state;

        let request = match request {
            Ok(request) => request,
            Err(e) => {
                warn!(%kind, error = %e, "create request rejected before sending");
                state.write().create_failed(messages::create_failed(kind));
                return;
            }
        };

        let this = self.clone();
        spawn(async move {
            match this.api.create(&request).await {
                Ok(item) => {
                    info!(%kind, id = item.key(), "created");
                    form.set(F::default());
                    state.write().create_succeeded();
                    this.fetch();
                }
                Err(e) => {
                    warn!(%kind, error = %e, "create failed");
                    state.write().create_failed(messages::create_failed(kind));
                }
            }
        });
    }

    fn start_fetch(&self) {
        let mut state = self.state;
        let cycle = state.write().begin_fetch();
        let api = self.api.clone();
        let kind = api.kind();
        debug!(%kind, cycle, "fetching");

        spawn(async move {
            match api.list().await {
                Ok(items) => {
                    debug!(%kind, cycle, count = items.len(), "fetch succeeded");
                    state.write().fetch_succeeded(items);
                }
                Err(e) => {
                    warn!(%kind, cycle, error = %e, "fetch failed");
                    state.write().fetch_failed(messages::retrying(kind));
                }
            }
        });
    }

    fn arm_retry(&self, pending: PendingRetry) {
        let kind = self.kind();
        debug!(
            %kind,
            attempt = pending.attempt,
            delay_ms = pending.delay.as_millis() as u64,
            "retry scheduled"
        );

        let this = self.clone();
        let task = spawn(async move {
            tokio::time::sleep(pending.delay).await;

            // Clear the slot rather than cancelling: this task is the one in it.
            let mut slot = this.retry_task;
            slot.set(None);

            let mut state = this.state;
            let go = state.write().retry_fired(pending.cycle);
            if go {
                info!(%kind, attempt = pending.attempt, "retrying fetch");
                this.start_fetch();
            }
        });

        let mut slot = self.retry_task;
        slot.set(Some(task));
    }

    fn cancel_retry(&self) {
        let mut slot = self.retry_task;
        let task = slot.write().take();
        if let Some(task) = task {
            task.cancel();
        }
    }
}

/// Mount-time fetch plus automatic retries for one resource list.
pub fn use_list_controller<A: ResourceApi>(api: A, policy: RetryPolicy) -> ListController<A> {
    let state = use_signal(ListState::<A::Item>::new);
    let retry_task = use_signal(|| None::<Task>);
    let controller = use_hook(move || ListController {
        api,
        state,
        retry_task,
    });

    use_effect({
        let controller = controller.clone();
        move || controller.fetch()
    });

    let pending = use_memo(move || state.read().pending_retry(&policy));

    use_effect({
        let controller = controller.clone();
        move || {
            let pending = pending.read().clone();
            controller.cancel_retry();
            if let Some(pending) = pending {
                controller.arm_retry(pending);
            }
        }
    });

    controller
}
