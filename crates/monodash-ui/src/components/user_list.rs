// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User management panel backed by Service A.

use dioxus::prelude::*;

use monodash_core::messages;
use monodash_core::types::{ResourceKind, User};

use crate::components::common::{
    CARD_STYLE, EmptyState, ErrorBanner, ListHeader, LoadingPlaceholder, PRIMARY_BUTTON_STYLE,
    TextField,
};
use crate::controller::use_list_controller;
use crate::forms::UserForm;
use crate::services::AppServices;
use crate::state::ListView;

const KIND: ResourceKind = ResourceKind::Users;

/// Fetches users on mount and wires the panel to the controller.
#[component]
pub fn UserList() -> Element {
    let svc = use_context::<AppServices>();
    let controller = use_list_controller(svc.users().clone(), svc.config().retry);
    let mut form = use_signal(UserForm::default);

    let view = controller.view();
    let values = form.read().clone();

    rsx! {
        UserPanel {
            view,
            form: values,
            on_toggle: {
                let controller = controller.clone();
                move |_| controller.toggle_form()
            },
            on_change: move |next: UserForm| form.set(next),
            on_submit: {
                let controller = controller.clone();
                move |_| {
                    let request = form.read().to_request();
                    controller.submit(request, form);
                }
            },
        }
    }
}

/// Stateless rendering of a user list snapshot.
#[component]
pub fn UserPanel(
    view: ListView<User>,
    form: UserForm,
    on_toggle: EventHandler<()>,
    on_change: EventHandler<UserForm>,
    on_submit: EventHandler<()>,
) -> Element {
    let ListView::Ready {
        error,
        form_visible,
        items,
    } = view
    else {
        return rsx! { LoadingPlaceholder { kind: KIND } };
    };

    rsx! {
        div { class: "user-list",
            ListHeader { kind: KIND, form_visible, on_toggle }

            if let Some(message) = error {
                ErrorBanner { message }
            }

            if form_visible {
                UserFormView { form, on_change, on_submit }
            }

            div { class: "list",
                if items.is_empty() {
                    EmptyState { kind: KIND }
                } else {
                    for user in items {
                        UserCard { key: "{user.id}", user: user.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn UserCard(user: User) -> Element {
    rsx! {
        div { class: "card", style: CARD_STYLE,
            h3 { style: "margin: 0 0 4px;", "{user.name}" }
            p { style: "margin: 2px 0;", strong { "ID: " } "{user.id}" }
            p { style: "margin: 2px 0;", strong { "Email: " } "{user.email}" }
            p { style: "margin: 2px 0;", strong { "Phone: " } "{user.phone}" }
            p { class: "date", style: "color: #999; font-size: 12px; margin: 2px 0;",
                strong { "Created: " }
                "{user.created_at}"
            }
        }
    }
}

#[component]
pub fn UserFormView(
    form: UserForm,
    on_change: EventHandler<UserForm>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form { class: "user-form",
            style: "padding: 12px; margin: 12px 0; border: 1px solid #e0e0e0; border-radius: 8px; background: #fafafa;",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },

            TextField {
                label: "Name",
                value: form.name.clone(),
                on_input: {
                    let form = form.clone();
                    move |name: String| on_change.call(UserForm { name, ..form.clone() })
                },
            }
            TextField {
                label: "Email",
                value: form.email.clone(),
                input_type: "email",
                on_input: {
                    let form = form.clone();
                    move |email: String| on_change.call(UserForm { email, ..form.clone() })
                },
            }
            TextField {
                label: "Phone",
                value: form.phone.clone(),
                input_type: "tel",
                on_input: {
                    let form = form.clone();
                    move |phone: String| on_change.call(UserForm { phone, ..form.clone() })
                },
            }

            button { r#type: "submit", style: "{PRIMARY_BUTTON_STYLE} margin-top: 12px;",
                "{messages::submit_form(KIND)}"
            }
        }
    }
}
