//! `HttpStockApi` against a mock upstream service.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use stocktally_infra::{HttpConfig, HttpStockApi};
use stocktally_reconcile::{
    FetchError, PersistError, PurchaseLedger, SalesLedger, StockReconciler, StockSink,
};

fn api_for(server: &MockServer) -> HttpStockApi {
    let config = HttpConfig {
        base_url: server.url("/api"),
        timeout: Duration::from_secs(5),
    };
    HttpStockApi::new(&config).unwrap()
}

#[tokio::test]
async fn list_purchases_decodes_the_ledger_payload() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/purchases");
            then.status(200).json_body(json!([
                {
                    "supplier": "City Wholesale",
                    "purchaseDate": "2024-03-12",
                    "items": [
                        { "itemName": "Rice", "quantity": 50, "unit": "kg", "unitPrice": 1.8 },
                        { "itemName": "Oil", "quantity": "10", "unit": "liter" }
                    ]
                }
            ]));
        })
        .await;

    let purchases = api_for(&server).list_purchases().await.unwrap();

    assert_eq!(purchases.len(), 1);
    let items = purchases[0].items.as_deref().unwrap();
    assert_eq!(items[0].quantity, Some(50.0));
    assert_eq!(items[1].quantity, Some(10.0));
}

#[tokio::test]
async fn lenient_quantities_survive_the_wire() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/sales");
            then.status(200).json_body(json!([
                { "items": [
                    { "itemName": "Sugar", "quantity": "plenty" },
                    { "itemName": "Rice", "quantity": 2 }
                ]}
            ]));
        })
        .await;

    let sales = api_for(&server).list_sales().await.unwrap();

    let items = sales[0].items.as_deref().unwrap();
    assert_eq!(items[0].quantity, None);
    assert_eq!(items[1].quantity, Some(2.0));
}

#[tokio::test]
async fn non_success_status_maps_to_fetch_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/purchases");
            then.status(502);
        })
        .await;

    let error = api_for(&server).list_purchases().await.unwrap_err();

    assert_eq!(error, FetchError::Status { code: 502 });
}

#[tokio::test]
async fn undecodable_payload_maps_to_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/sales");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let error = api_for(&server).list_sales().await.unwrap_err();

    assert!(matches!(error, FetchError::Decode(_)));
}

#[tokio::test]
async fn save_snapshot_posts_the_full_array() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/stock").json_body(json!([
                {
                    "itemName": "Rice",
                    "purchaseQuantity": 50.0,
                    "saleQuantity": 20.0,
                    "availableQuantity": 30.0,
                    "unit": "kg"
                }
            ]));
            then.status(201);
        })
        .await;

    let entries = vec![stocktally_core::StockEntry {
        item_name: "Rice".to_string(),
        purchase_quantity: 50.0,
        sale_quantity: 20.0,
        available_quantity: 30.0,
        unit: "kg".to_string(),
    }];

    api_for(&server).save_snapshot(&entries).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn sink_rejection_detail_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/stock");
            then.status(422).json_body(json!({ "error": "duplicate item names" }));
        })
        .await;

    let error = api_for(&server).save_snapshot(&[]).await.unwrap_err();

    assert_eq!(
        error,
        PersistError::Rejected("duplicate item names".to_string())
    );
}

#[tokio::test]
async fn sink_failure_without_detail_maps_to_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/stock");
            then.status(500);
        })
        .await;

    let error = api_for(&server).save_snapshot(&[]).await.unwrap_err();

    assert_eq!(error, PersistError::Status { code: 500 });
}

#[tokio::test]
async fn full_reconcile_flow_over_http() {
    stocktally_observability::init();

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/purchases");
            then.status(200).json_body(json!([
                { "items": [{ "itemName": "Rice", "quantity": 50, "unit": "kg" }] }
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/sales");
            then.status(200).json_body(json!([
                { "items": [{ "itemName": "Rice", "quantity": 70 }] }
            ]));
        })
        .await;
    let save = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/stock").json_body(json!([
                {
                    "itemName": "Rice",
                    "purchaseQuantity": 50.0,
                    "saleQuantity": 70.0,
                    "availableQuantity": 0.0,
                    "unit": "kg"
                }
            ]));
            then.status(201);
        })
        .await;

    let api = Arc::new(api_for(&server));
    let reconciler = StockReconciler::new(api.clone(), api.clone(), api.clone());

    let outcome = reconciler.reconcile_and_persist().await.unwrap();

    assert_eq!(outcome.persisted, Ok(()));
    assert_eq!(outcome.entries[0].available_quantity, 0.0);
    save.assert_async().await;
}
