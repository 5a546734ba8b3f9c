//! Router tests over the in-memory store

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use librarian_server::{
    api::create_router,
    config::{AppConfig, StorageBackend},
    repository::Repository,
    services::{dump::NoopObserver, Services},
    AppState,
};

fn app() -> Router {
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Memory;
    let services = Services::new(Repository::in_memory(), Arc::new(NoopObserver));
    create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health_reports_memory_storage() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "memory");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_empty_collections_are_ok() {
    let app = app();
    for uri in [
        "/api/v1/authors",
        "/api/v1/books",
        "/api/v1/special-editions",
        "/api/v1/cities",
        "/api/v1/addresses",
        "/api/v1/customers",
        "/api/v1/admins",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([]), "{}", uri);
    }
}

#[tokio::test]
async fn test_city_and_address_flow() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/cities",
        Some(json!({"postal_code": "11000", "city_name": "Belgrade"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, address) = send(
        &app,
        Method::POST,
        "/api/v1/addresses/11000",
        Some(json!({"id": "1", "number": 5, "street": "Knez Mihailova"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(address["city"]["city_name"], "Belgrade");
    assert_eq!(address["postal_code"], "11000");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/addresses/21000",
        Some(json!({"id": "2", "number": 1, "street": "Zmaj Jovina"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchReference");

    let (status, _) = send(&app, Method::DELETE, "/api/v1/addresses/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, Method::GET, "/api/v1/addresses/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchRecord");
}

#[tokio::test]
async fn test_address_update_moves_city() {
    let app = app();
    for (code, name) in [("11000", "Belgrade"), ("21000", "Novi Sad")] {
        send(
            &app,
            Method::POST,
            "/api/v1/cities",
            Some(json!({"postal_code": code, "city_name": name})),
        )
        .await;
    }
    send(
        &app,
        Method::POST,
        "/api/v1/addresses/11000",
        Some(json!({"id": "7", "number": 3, "street": "Terazije"})),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/addresses/7?postal_code=21000",
        Some(json!({"street": "Bulevar Oslobodjenja"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"]["city_name"], "Novi Sad");
    assert_eq!(body["street"], "Bulevar Oslobodjenja");
    assert_eq!(body["number"], 3);
}

#[tokio::test]
async fn test_author_book_flow() {
    let app = app();
    let (status, author) = send(
        &app,
        Method::POST,
        "/api/v1/authors",
        Some(json!({"name": "Ivo", "last_name": "Andric", "date_of_birth": "1892-10-09"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let author_id = author["author_id"].as_str().unwrap().to_string();

    let (status, book) = send(
        &app,
        Method::POST,
        &format!("/api/v1/books/{}", author_id),
        Some(json!({"isbn": "9788652120432", "title": "Na Drini cuprija", "genre": "Roman"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book["author"]["name"], "Ivo");
    assert_eq!(book["available"], true);

    let (status, book) = send(&app, Method::GET, "/api/v1/books/9788652120432", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["special_edition"], false);
    assert!(book["details"].as_str().unwrap().ends_with("Special edition:NO"));

    let (status, author) = send(&app, Method::GET, &format!("/api/v1/authors/{}", author_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(author["books"][0]["title"], "Na Drini cuprija");
}

#[tokio::test]
async fn test_book_without_isbn_lists_missing_field() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/books/1",
        Some(json!({"title": "T", "genre": "G"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidFields");
    assert_eq!(
        body["fields"],
        json!([{"field": "isbn", "message": "ISBN cannot be empty string"}])
    );
}

#[tokio::test]
async fn test_city_delete_removes_its_addresses() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/v1/cities",
        Some(json!({"postal_code": "11000", "city_name": "Belgrade"})),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/api/v1/addresses/11000",
        Some(json!({"id": "1", "number": 5, "street": "Knez Mihailova"})),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/cities/11000",
        Some(json!({"city_name": "Beograd"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, address) = send(&app, Method::GET, "/api/v1/addresses/1", None).await;
    assert_eq!(address["city"]["city_name"], "Beograd");

    let (status, _) = send(&app, Method::DELETE, "/api/v1/cities/11000", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, "/api/v1/addresses/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_forbidden_isbn_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/books/978*123", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_validation_failure_lists_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/customers",
        Some(json!({"jmbg": "123", "first_name": "", "last_name": "Petrovic"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidFields");
    assert_eq!(
        body["fields"],
        json!([
            {"field": "first_name", "message": "First name must be entered"},
            {"field": "jmbg", "message": "JMBG must be 13 digit number"},
        ])
    );
}

#[tokio::test]
async fn test_customer_duplicate_is_conflict() {
    let app = app();
    let customer = json!({"jmbg": "0101990710006", "first_name": "Petar", "last_name": "Petrovic"});
    let (status, created) = send(&app, Method::POST, "/api/v1/customers", Some(customer.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["jmbg"], "0101990710006");

    let (status, body) = send(&app, Method::POST, "/api/v1/customers", Some(customer)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");

    let (status, _) = send(&app, Method::GET, "/api/v1/customers/12345", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_missing_records_is_not_found() {
    let app = app();
    for uri in [
        "/api/v1/authors/1",
        "/api/v1/books/1",
        "/api/v1/special-editions/1",
        "/api/v1/cities/11000",
        "/api/v1/addresses/1",
        "/api/v1/customers/0101990710006",
        "/api/v1/admins/1",
    ] {
        let (status, _) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
    }
}
