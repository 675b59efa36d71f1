// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Order management panel backed by Service B.

use dioxus::prelude::*;

use monodash_core::messages;
use monodash_core::types::{Order, ResourceKind};

use crate::components::common::{
    CARD_STYLE, EmptyState, ErrorBanner, ListHeader, LoadingPlaceholder, PRIMARY_BUTTON_STYLE,
    TextField,
};
use crate::controller::use_list_controller;
use crate::forms::OrderForm;
use crate::services::AppServices;
use crate::state::ListView;

const KIND: ResourceKind = ResourceKind::Orders;

#[component]
pub fn OrderList() -> Element {
    let svc = use_context::<AppServices>();
    let controller = use_list_controller(svc.orders().clone(), svc.config().retry);
    let mut form = use_signal(OrderForm::default);

    let view = controller.view();
    let values = form.read().clone();

    rsx! {
        OrderPanel {
            view,
            form: values,
            on_toggle: {
                let controller = controller.clone();
                move |_| controller.toggle_form()
            },
            on_change: move |next: OrderForm| form.set(next),
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

#[component]
pub fn OrderPanel(
    view: ListView<Order>,
    form: OrderForm,
    on_toggle: EventHandler<()>,
    on_change: EventHandler<OrderForm>,
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
        div { class: "order-list",
            ListHeader { kind: KIND, form_visible, on_toggle }

            if let Some(message) = error {
                ErrorBanner { message }
            }

            if form_visible {
                OrderFormView { form, on_change, on_submit }
            }

            div { class: "list",
                if items.is_empty() {
                    EmptyState { kind: KIND }
                } else {
                    for order in items {
                        OrderCard { key: "{order.id}", order: order.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn OrderCard(order: Order) -> Element {
    let status = order.status.as_str();

    rsx! {
        div { class: "card", style: CARD_STYLE,
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0 0 4px;", "{order.product_name}" }
                span { class: "status",
                    style: "font-size: 12px; padding: 4px 8px; border-radius: 4px; background: {status_bg(status)}; color: {status_fg(status)};",
                    "{order.status}"
                }
            }
            p { style: "margin: 2px 0;", strong { "Order #: " } "{order.order_number}" }
            p { style: "margin: 2px 0;", strong { "Customer ID: " } "{order.customer_id}" }
            p { style: "margin: 2px 0;", strong { "Quantity: " } "{order.quantity}" }
            p { style: "margin: 2px 0;", strong { "Unit Price: " } "{order.unit_price}" }
            p { style: "margin: 2px 0;", strong { "Total: " } "{order.total_amount}" }
            p { class: "date", style: "color: #999; font-size: 12px; margin: 2px 0;",
                strong { "Created: " }
                "{order.created_at}"
            }
        }
    }
}

#[component]
pub fn OrderFormView(
    form: OrderForm,
    on_change: EventHandler<OrderForm>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form { class: "order-form",
            style: "padding: 12px; margin: 12px 0; border: 1px solid #e0e0e0; border-radius: 8px; background: #fafafa;",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },

            TextField {
                label: "Customer ID",
                value: form.customer_id.clone(),
                on_input: {
                    let form = form.clone();
                    move |customer_id: String| on_change.call(OrderForm { customer_id, ..form.clone() })
                },
            }
            TextField {
                label: "Product Name",
                value: form.product_name.clone(),
                on_input: {
                    let form = form.clone();
                    move |product_name: String| on_change.call(OrderForm { product_name, ..form.clone() })
                },
            }
            TextField {
                label: "Quantity",
                value: form.quantity.clone(),
                input_type: "number",
                min: "1",
                on_input: {
                    let form = form.clone();
                    move |quantity: String| on_change.call(OrderForm { quantity, ..form.clone() })
                },
            }
            TextField {
                label: "Unit Price",
                value: form.unit_price.clone(),
                input_type: "number",
                min: "0",
                step: "0.01",
                on_input: {
                    let form = form.clone();
                    move |unit_price: String| on_change.call(OrderForm { unit_price, ..form.clone() })
                },
            }

            button { r#type: "submit", style: "{PRIMARY_BUTTON_STYLE} margin-top: 12px;",
                "{messages::submit_form(KIND)}"
            }
        }
    }
}

// Service B currently only issues PENDING; the rest are the lifecycle states
// an order can be moved through later.
fn status_bg(status: &str) -> &'static str {
    match status {
        "PENDING" => "#fff3cd",
        "CONFIRMED" | "PROCESSING" => "#cce5ff",
        "SHIPPED" | "DELIVERED" | "COMPLETED" => "#d4edda",
        "CANCELLED" | "FAILED" => "#f8d7da",
        _ => "#f0f0f0",
    }
}

fn status_fg(status: &str) -> &'static str {
    match status {
        "PENDING" => "#856404",
        "CONFIRMED" | "PROCESSING" => "#004085",
        "SHIPPED" | "DELIVERED" | "COMPLETED" => "#155724",
        "CANCELLED" | "FAILED" => "#721c24",
        _ => "#333",
    }
}
