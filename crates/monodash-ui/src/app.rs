// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Root component. Expects an `AppServices` in context.

use dioxus::prelude::*;

use crate::components::{OrderList, UserList};
use crate::services::AppServices;

pub const TITLE: &str = "Spring Boot Monorepo Dashboard";

#[component]
pub fn App() -> Element {
    let svc = use_context::<AppServices>();
    let config = svc.config();

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            header { class: "app-header",
                style: "padding: 16px 24px; border-bottom: 1px solid #e0e0e0; background: #fafafa;",
                h1 { style: "margin: 0;", "{TITLE}" }
                p { style: "color: #666; margin: 4px 0 0;",
                    "Dioxus Frontend consuming Service A (Users) and Service B (Orders)"
                }
            }

            div { class: "dashboard",
                style: "flex: 1; display: grid; grid-template-columns: 1fr 1fr; gap: 24px; padding: 16px 24px;",
                section { class: "section", UserList {} }
                section { class: "section", OrderList {} }
            }

            footer { class: "app-footer",
                style: "padding: 8px 24px; border-top: 1px solid #e0e0e0; color: #666; font-size: 13px;",
                p {
                    strong { "Service A:" }
                    " {config.service_a_url} | "
                    strong { "Service B:" }
                    " {config.service_b_url}"
                }
            }
        }
    }
}
