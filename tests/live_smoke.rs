//! Smoke tests against a running server
//!
//! Run with a server started locally: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8747/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_trip_lifecycle() {
    let client = Client::new();

    let response = client
        .post(format!("{}/trips", BASE_URL))
        .json(&json!({
            "name": "Smoke test trip",
            "startDate": "2026-01-23",
            "durationDays": 2,
            "season": "winter"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let trip: Value = response.json().await.expect("Failed to parse response");
    let trip_id = trip["id"].as_str().expect("No trip id");

    let response = client
        .get(format!("{}/trips/{}/days", BASE_URL, trip_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let days: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(days.as_array().expect("days array").len(), 2);

    let response = client
        .delete(format!("{}/trips/{}", BASE_URL, trip_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_weather_lookup() {
    let client = Client::new();

    let response = client
        .get(format!("{}/weather", BASE_URL))
        .query(&[("location", "Kyoto")])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["current"]["icon"].is_string());
    assert!(body["daily"].is_array());
}
