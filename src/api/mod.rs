//! API handlers for Librarian REST endpoints

pub mod addresses;
pub mod admins;
pub mod authors;
pub mod books;
pub mod cities;
pub mod customers;
pub mod health;
pub mod openapi;
pub mod special_editions;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
///
/// Creation routes take the parent identity (author, city) in the same path
/// position as the record identity, so both share one route per resource.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authors
        .route(
            "/authors",
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        // Books
        .route("/books", get(books::list_books))
        .route(
            "/books/:id",
            get(books::get_book)
                .post(books::create_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Special editions
        .route(
            "/special-editions",
            get(special_editions::list_special_editions),
        )
        .route(
            "/special-editions/:id",
            get(special_editions::get_special_edition)
                .post(special_editions::create_special_edition)
                .put(special_editions::update_special_edition)
                .delete(special_editions::delete_special_edition),
        )
        // Cities
        .route("/cities", get(cities::list_cities).post(cities::create_city))
        .route(
            "/cities/:id",
            get(cities::get_city)
                .put(cities::update_city)
                .delete(cities::delete_city),
        )
        // Addresses
        .route("/addresses", get(addresses::list_addresses))
        .route(
            "/addresses/:id",
            get(addresses::get_address)
                .post(addresses::create_address)
                .put(addresses::update_address)
                .delete(addresses::delete_address),
        )
        // Customers
        .route(
            "/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        // Admins
        .route("/admins", get(admins::list_admins).post(admins::create_admin))
        .route(
            "/admins/:id",
            get(admins::get_admin)
                .put(admins::update_admin)
                .delete(admins::delete_admin),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
