// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end tests of the service clients against the in-memory stubs.

use std::sync::Arc;

use monodash_client::{OrderClient, ResourceApi, UserClient};
use monodash_core::error::MonodashError;
use monodash_core::types::{CreateOrderRequest, CreateUserRequest, ResourceKind};
use monodash_stub::{OrderService, StubServer, UserService};

async fn users_stub() -> (StubServer, UserClient) {
    let server = StubServer::start_local(Arc::new(UserService::new()))
        .await
        .unwrap();
    let client = UserClient::new(&server.base_url()).unwrap();
    (server, client)
}

async fn orders_stub() -> (StubServer, OrderClient) {
    let server = StubServer::start_local(Arc::new(OrderService::new()))
        .await
        .unwrap();
    let client = OrderClient::new(&server.base_url()).unwrap();
    (server, client)
}

fn ada() -> CreateUserRequest {
    CreateUserRequest {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        phone: "+442012345678".into(),
    }
}

fn widgets(quantity: i64) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_id: "cust-42".into(),
        product_name: "Widget".into(),
        quantity,
        unit_price: 12.5,
    }
}

// -- Users -------------------------------------------------------------------

#[tokio::test]
async fn empty_service_lists_nothing() {
    let (_server, client) = users_stub().await;
    assert!(client.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn created_user_is_listed_and_retrievable() {
    let (_server, client) = users_stub().await;

    let created = client.create_user(&ada()).await.unwrap();
    assert_eq!(created.name, "Ada Lovelace");
    assert_eq!(created.email, "ada@example.com");
    assert!(!created.id.is_empty());

    let listed = client.list_users().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let fetched = client.get_user(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_user_is_a_generic_fetch_failure() {
    let (_server, client) = users_stub().await;
    let err = client.get_user("does-not-exist").await.unwrap_err();
    assert!(matches!(err, MonodashError::FetchFailed(ResourceKind::Users)));
}

#[tokio::test]
async fn rejected_user_is_a_generic_create_failure() {
    let (_server, client) = users_stub().await;
    let mut bad = ada();
    bad.email = "nope".into();

    let err = client.create_user(&bad).await.unwrap_err();
    assert!(matches!(err, MonodashError::CreateFailed(ResourceKind::Users)));
    assert_eq!(err.to_string(), "failed to create user");
    assert!(client.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn unavailable_service_fails_fetch_until_it_recovers() {
    let (server, client) = users_stub().await;
    server.set_available(false);

    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, MonodashError::FetchFailed(ResourceKind::Users)));

    server.set_available(true);
    assert!(client.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    let (server, _) = users_stub().await;
    let base = server.base_url();
    server.stop().await.unwrap();

    let client = UserClient::new(&base).unwrap();
    let err = client.list_users().await.unwrap_err();
    assert!(matches!(
        err,
        MonodashError::Transport {
            kind: ResourceKind::Users,
            ..
        }
    ));
}

// -- Orders ------------------------------------------------------------------

#[tokio::test]
async fn created_order_comes_back_formatted() {
    let (_server, client) = orders_stub().await;

    let order = client.create_order(&widgets(4)).await.unwrap();
    assert!(order.order_number.starts_with("ORD-"));
    assert_eq!(order.customer_id, "cust-42");
    assert_eq!(order.quantity, "4");
    assert_eq!(order.unit_price, "$12.50");
    assert_eq!(order.total_amount, "$50.00");
    assert_eq!(order.status, "PENDING");

    assert_eq!(client.get_order(&order.id).await.unwrap(), order);
    assert_eq!(client.list_orders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn zero_quantity_order_is_rejected() {
    let (_server, client) = orders_stub().await;
    let err = client.create_order(&widgets(0)).await.unwrap_err();
    assert!(matches!(err, MonodashError::CreateFailed(ResourceKind::Orders)));
}

#[tokio::test]
async fn trait_dispatch_matches_inherent_calls() {
    let (_server, client) = orders_stub().await;
    assert_eq!(ResourceApi::kind(&client), ResourceKind::Orders);

    let created = ResourceApi::create(&client, &widgets(2)).await.unwrap();
    let listed = ResourceApi::list(&client).await.unwrap();
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(ResourceApi::get(&client, &created.id).await.unwrap(), created);
}
