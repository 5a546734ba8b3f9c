//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{addresses, admins, authors, books, cities, customers, health, special_editions};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Librarian API",
        version = "1.0.0",
        description = "Library registry REST API: authors, books, cities, addresses, customers and admins",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Special editions
        special_editions::list_special_editions,
        special_editions::get_special_edition,
        special_editions::create_special_edition,
        special_editions::update_special_edition,
        special_editions::delete_special_edition,
        // Cities
        cities::list_cities,
        cities::get_city,
        cities::create_city,
        cities::update_city,
        cities::delete_city,
        // Addresses
        addresses::list_addresses,
        addresses::get_address,
        addresses::create_address,
        addresses::update_address,
        addresses::delete_address,
        // Customers
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        // Admins
        admins::list_admins,
        admins::get_admin,
        admins::create_admin,
        admins::update_admin,
        admins::delete_admin,
    ),
    components(
        schemas(
            // Authors
            crate::models::Author,
            crate::models::author::AuthorSummary,
            crate::models::author::AuthorDetails,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            // Books
            crate::models::book::BookSummary,
            crate::models::book::BookDetails,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::SpecialEditionSummary,
            crate::models::book::SpecialEditionDetails,
            crate::models::book::CreateSpecialEdition,
            crate::models::book::UpdateSpecialEdition,
            // Cities
            crate::models::City,
            crate::models::city::CreateCity,
            crate::models::city::UpdateCity,
            // Addresses
            crate::models::Address,
            crate::models::address::CreateAddress,
            crate::models::address::UpdateAddress,
            // Customers
            crate::models::Customer,
            crate::models::customer::CreateCustomer,
            crate::models::customer::UpdateCustomer,
            // Admins
            crate::models::Admin,
            crate::models::admin::CreateAdmin,
            crate::models::admin::UpdateAdmin,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::FieldViolation,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book management, every edition"),
        (name = "special-editions", description = "Special edition books"),
        (name = "cities", description = "City management"),
        (name = "addresses", description = "Address management"),
        (name = "customers", description = "Customer management"),
        (name = "admins", description = "Administrator management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
