//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;
pub mod scripted_api;

use product_catalog::catalog::{Product, ProductId, ProductPage};
use product_catalog::ui::fetch::{FetchEvent, FetchReceiver};
use product_catalog::ui::plain_text;
use ratatui::text::Line;
use std::time::Duration;

pub use mock_catalog::{MockCatalog, MockResponse};
pub use scripted_api::ScriptedApi;

/// A fully populated product with predictable field values.
pub fn product(id: ProductId) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        description: format!("Description of product {id}."),
        price: 10.0 + f64::from(id) + 0.99,
        discount_percentage: 12.5,
        rating: 4.25,
        stock: id * 3,
        brand: format!("Brand {id}"),
        category: "testing".to_string(),
        thumbnail: format!("https://cdn.example.com/{id}/thumbnail.png"),
        images: vec![format!("https://cdn.example.com/{id}/1.png")],
    }
}

pub fn page(ids: &[ProductId]) -> ProductPage {
    ProductPage {
        products: ids.iter().copied().map(product).collect(),
        total: 194,
        skip: 0,
        limit: 30,
    }
}

pub fn product_json(id: ProductId) -> String {
    serde_json::to_string(&product(id)).unwrap()
}

pub fn page_json(ids: &[ProductId]) -> String {
    serde_json::to_string(&page(ids)).unwrap()
}

pub fn texts(lines: &[Line<'_>]) -> Vec<String> {
    lines.iter().map(plain_text).collect()
}

/// Next fetch event, failing the test if none arrives within a second.
pub async fn next_event(rx: &mut FetchReceiver) -> FetchEvent {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for fetch event")
        .expect("fetch channel closed")
}

/// Asserts that no fetch event arrives within a short window.
pub async fn assert_no_event(rx: &mut FetchReceiver) {
    let result = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(result.is_err(), "unexpected fetch event");
}

/// Yields to spawned tasks until `condition` holds.
pub async fn wait_for(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
