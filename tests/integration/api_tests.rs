//! API integration tests against a running server

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

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
async fn test_seeded_admins_are_listed() {
    let client = Client::new();

    let response = client
        .get(format!("{}/admins", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.as_array().map(|a| !a.is_empty()).unwrap_or(false));
}

#[tokio::test]
#[ignore]
async fn test_city_roundtrip() {
    let client = Client::new();
    let postal_code = "35000";

    let response = client
        .post(format!("{}/cities", BASE_URL))
        .json(&json!({
            "postal_code": postal_code,
            "city_name": "Jagodina"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/cities/{}", BASE_URL, postal_code))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["city_name"], "Jagodina");

    let response = client
        .delete(format!("{}/cities/{}", BASE_URL, postal_code))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_book_for_unknown_author() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books/no-such-author", BASE_URL))
        .json(&json!({
            "isbn": "9780000000001",
            "title": "Nothing",
            "genre": "None"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchReference");
}
