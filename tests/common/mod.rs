//! Common test utilities and fixtures.
//!
//! This module provides shared receipt payloads and a wrapper around the
//! router so tests can talk to the API without binding a socket.

#![cfg(feature = "server")]
#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use receipt_processor::server::{AppState, router};

// =============================================================================
// Receipt Payloads
// =============================================================================

/// Five-item Target receipt worth 28 points.
pub fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

/// Four-item corner market receipt worth 109 points.
pub fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

/// Copy of `receipt` with one top-level field removed.
pub fn without_field(mut receipt: Value, field: &str) -> Value {
    if let Some(obj) = receipt.as_object_mut() {
        obj.remove(field);
    }
    receipt
}

// =============================================================================
// Test Application
// =============================================================================

/// Test application wrapper around an in-memory router.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with an empty receipt store.
    pub fn new() -> anyhow::Result<Self> {
        let state = AppState::new();
        let server = TestServer::new(router(state.clone()))?;
        Ok(Self { server, state })
    }

    /// Submit a receipt and return the generated ID.
    pub async fn process(&self, receipt: &Value) -> anyhow::Result<String> {
        let response = self.server.post("/receipts/process").json(receipt).await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["id"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| anyhow::anyhow!("response has no id: {}", body))
    }

    /// Fetch the points for a receipt ID, asserting it exists.
    pub async fn points(&self, id: &str) -> anyhow::Result<u64> {
        let response = self.server.get(&format!("/receipts/{}/points", id)).await;
        response.assert_status(StatusCode::OK);

        let body: Value = response.json();
        body["points"]
            .as_u64()
            .ok_or_else(|| anyhow::anyhow!("response has no points: {}", body))
    }
}

// =============================================================================
// Assertion Helpers
// =============================================================================

/// Assert that a response body is `{"error": ...}` and return the message.
pub fn error_message(body: &Value) -> String {
    let message = body["error"].as_str();
    assert!(message.is_some(), "Expected error body, got: {}", body);
    message.unwrap_or_default().to_owned()
}
