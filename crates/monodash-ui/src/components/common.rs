// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pieces shared by the user and order lists.

use dioxus::prelude::*;

use monodash_core::messages;
use monodash_core::types::ResourceKind;

pub(crate) const INPUT_STYLE: &str = "width: 100%; padding: 10px; font-size: 15px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;";
pub(crate) const LABEL_STYLE: &str =
    "display: block; font-size: 13px; font-weight: bold; margin: 8px 0 4px;";
pub(crate) const CARD_STYLE: &str =
    "padding: 12px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 8px;";
pub(crate) const PRIMARY_BUTTON_STYLE: &str = "padding: 8px 16px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 14px; font-weight: bold;";

#[component]
pub fn LoadingPlaceholder(kind: ResourceKind) -> Element {
    rsx! {
        div { class: "loading",
            style: "text-align: center; color: #888; padding: 32px 0;",
            "{messages::loading(kind)}"
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error",
            style: "padding: 12px; margin: 12px 0; border-radius: 8px; background: #f8d7da; color: #721c24; font-size: 14px;",
            "{message}"
        }
    }
}

#[component]
pub fn EmptyState(kind: ResourceKind) -> Element {
    rsx! {
        p { class: "empty",
            style: "text-align: center; color: #aaa; margin: 32px 0;",
            "{messages::empty(kind)}"
        }
    }
}

/// Heading plus the button that opens or closes the creation form.
#[component]
pub fn ListHeader(kind: ResourceKind, form_visible: bool, on_toggle: EventHandler<()>) -> Element {
    let label = if form_visible {
        "Cancel"
    } else {
        messages::open_form(kind)
    };

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center;",
            h2 { "{messages::heading(kind)}" }
            button {
                class: "toggle-form",
                style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px;",
                onclick: move |_| on_toggle.call(()),
                "{label}"
            }
        }
    }
}

/// Labelled, required input reporting every keystroke. `min` and `step` only
/// matter for `input_type: "number"`.
#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    min: Option<&'static str>,
    step: Option<&'static str>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label { style: LABEL_STYLE, "{label}" }
        input {
            r#type: input_type,
            placeholder: label,
            value: "{value}",
            required: true,
            min,
            step,
            style: INPUT_STYLE,
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}
