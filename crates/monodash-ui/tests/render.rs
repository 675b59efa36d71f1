// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Server-side renders of the dashboard and its list panels.

use dioxus::prelude::*;

use monodash_core::DashboardConfig;
use monodash_core::types::{Order, User};
use monodash_ui::forms::{OrderForm, UserForm};
use monodash_ui::state::ListView;
use monodash_ui::{App, AppServices, OrderPanel, UserPanel};

fn render(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn user(n: u32) -> User {
    User {
        id: format!("u-{n}"),
        name: format!("User {n}"),
        email: format!("user{n}@example.com"),
        phone: "+15550100".into(),
        created_at: "2026-01-02 03:04:05".into(),
        updated_at: None,
    }
}

fn order() -> Order {
    Order {
        id: "o-1".into(),
        order_number: "ORD-AB12CD34".into(),
        customer_id: "cust-42".into(),
        product_name: "Widget".into(),
        quantity: "4".into(),
        unit_price: "$12.50".into(),
        total_amount: "$50.00".into(),
        status: "PENDING".into(),
        created_at: "2026-01-02 03:04:05".into(),
    }
}

fn cards(html: &str) -> usize {
    html.matches("class=\"card\"").count()
}

// -- Harnesses ---------------------------------------------------------------

#[derive(Props, Clone, PartialEq)]
struct UsersProps {
    view: ListView<User>,
    form: UserForm,
}

fn users_panel(props: UsersProps) -> Element {
    rsx! {
        UserPanel {
            view: props.view,
            form: props.form,
            on_toggle: |_: ()| {},
            on_change: |_: UserForm| {},
            on_submit: |_: ()| {},
        }
    }
}

fn render_users(view: ListView<User>, form: UserForm) -> String {
    render(VirtualDom::new_with_props(users_panel, UsersProps { view, form }))
}

#[derive(Props, Clone, PartialEq)]
struct OrdersProps {
    view: ListView<Order>,
    form: OrderForm,
}

fn orders_panel(props: OrdersProps) -> Element {
    rsx! {
        OrderPanel {
            view: props.view,
            form: props.form,
            on_toggle: |_: ()| {},
            on_change: |_: OrderForm| {},
            on_submit: |_: ()| {},
        }
    }
}

fn render_orders(view: ListView<Order>, form: OrderForm) -> String {
    render(VirtualDom::new_with_props(orders_panel, OrdersProps { view, form }))
}

// -- Root --------------------------------------------------------------------

#[test]
fn root_shows_title_both_placeholders_and_endpoints() {
    let config = DashboardConfig::default();
    let services = AppServices::new(config.clone()).unwrap();
    let html = render(VirtualDom::new(App).with_root_context(services));

    assert!(html.contains("Spring Boot Monorepo Dashboard"));
    assert!(html.contains("consuming Service A (Users) and Service B (Orders)"));
    assert!(html.contains("Loading users..."));
    assert!(html.contains("Loading orders..."));
    assert!(html.contains("Service A:"));
    assert!(html.contains(&config.service_a_url));
    assert!(html.contains("Service B:"));
    assert!(html.contains(&config.service_b_url));
    assert_eq!(cards(&html), 0);
}

// -- Users -------------------------------------------------------------------

#[test]
fn loading_shows_only_the_placeholder() {
    let html = render_users(ListView::Loading, UserForm::default());
    assert!(html.contains("Loading users..."));
    assert!(!html.contains("User Management"));
    assert!(!html.contains("class=\"error\""));
}

#[test]
fn n_users_render_n_cards() {
    let view = ListView::Ready {
        error: None,
        form_visible: false,
        items: vec![user(1), user(2), user(3)],
    };
    let html = render_users(view, UserForm::default());

    assert_eq!(cards(&html), 3);
    assert!(html.contains("User 2"));
    assert!(html.contains("ID: "));
    assert!(html.contains("u-3"));
    assert!(html.contains("user3@example.com"));
    assert!(html.contains("User Management (Service A)"));
    assert!(!html.contains("Loading users..."));
    assert!(!html.contains("No users found"));
}

#[test]
fn empty_list_shows_empty_state_only() {
    let view = ListView::Ready {
        error: None,
        form_visible: false,
        items: vec![],
    };
    let html = render_users(view, UserForm::default());

    assert!(html.contains("No users found. Create your first user!"));
    assert!(!html.contains("Loading users..."));
    assert!(!html.contains("class=\"error\""));
    assert_eq!(cards(&html), 0);
}

#[test]
fn fetch_failure_shows_retry_banner_over_previous_list() {
    let view = ListView::Ready {
        error: Some("Service A is starting up... Retrying automatically.".into()),
        form_visible: false,
        items: vec![user(1)],
    };
    let html = render_users(view, UserForm::default());

    assert!(html.contains("class=\"error\""));
    assert!(html.contains("Service A is starting up... Retrying automatically."));
    assert_eq!(cards(&html), 1);
}

#[test]
fn failed_create_keeps_form_and_values() {
    let form = UserForm {
        name: "Ada".into(),
        email: "not-an-email".into(),
        phone: "12345".into(),
    };
    let view = ListView::Ready {
        error: Some("Failed to create user".into()),
        form_visible: true,
        items: vec![],
    };
    let html = render_users(view, form);

    assert!(html.contains("Failed to create user"));
    assert!(html.contains("class=\"user-form\""));
    assert!(html.contains("value=\"Ada\""));
    assert!(html.contains("value=\"not-an-email\""));
    assert_eq!(html.matches("required").count(), 3);
    assert!(!html.contains("step="));
    assert!(html.contains("Cancel"));
    assert!(html.contains("Create User"));
}

#[test]
fn hidden_form_shows_open_button() {
    let view = ListView::Ready {
        error: None,
        form_visible: false,
        items: vec![user(1)],
    };
    let html = render_users(view, UserForm::default());

    assert!(!html.contains("class=\"user-form\""));
    assert!(html.contains("Add User"));
    assert!(!html.contains("Cancel"));
}

// -- Orders ------------------------------------------------------------------

#[test]
fn order_card_shows_formatted_fields_and_status() {
    let view = ListView::Ready {
        error: None,
        form_visible: false,
        items: vec![order()],
    };
    let html = render_orders(view, OrderForm::default());

    assert_eq!(cards(&html), 1);
    assert!(html.contains("Order Management (Service B)"));
    assert!(html.contains("ORD-AB12CD34"));
    assert!(html.contains("$12.50"));
    assert!(html.contains("$50.00"));
    assert!(html.contains("PENDING"));
    assert!(html.contains("Create Order"));
}

#[test]
fn order_form_starts_with_quantity_one_and_price_zero() {
    let view = ListView::Ready {
        error: None,
        form_visible: true,
        items: vec![],
    };
    let html = render_orders(view, OrderForm::default());

    assert!(html.contains("class=\"order-form\""));
    assert!(html.contains("value=\"1\""));
    assert!(html.contains("value=\"0\""));
    assert!(html.contains("min=\"1\""));
    assert!(html.contains("step=\"0.01\""));
    assert!(html.contains("required"));
    assert!(html.contains("No orders found. Create your first order!"));
}
