//! Customers API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        customer::{CreateCustomer, UpdateCustomer},
        Customer,
    },
};

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "List of customers", body = Vec<Customer>)
    )
)]
pub async fn list_customers(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.get_all().await?;
    Ok(Json(customers))
}

/// Get customer by JMBG
#[utoipa::path(
    get,
    path = "/customers/{jmbg}",
    tag = "customers",
    params(("jmbg" = String, Path, description = "13 digit JMBG")),
    responses(
        (status = 200, description = "Customer", body = Customer),
        (status = 400, description = "Malformed JMBG", body = crate::error::ErrorResponse),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_customer(
    State(state): State<crate::AppState>,
    Path(jmbg): Path<String>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.get_one(&jmbg).await?;
    Ok(Json(customer))
}

/// Register a customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse),
        (status = 409, description = "JMBG already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_customer(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = state.services.customers.create(data).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Update a customer's names
#[utoipa::path(
    put,
    path = "/customers/{jmbg}",
    tag = "customers",
    params(("jmbg" = String, Path, description = "13 digit JMBG")),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_customer(
    State(state): State<crate::AppState>,
    Path(jmbg): Path<String>,
    Json(data): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.update(&jmbg, data).await?;
    Ok(Json(customer))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{jmbg}",
    tag = "customers",
    params(("jmbg" = String, Path, description = "13 digit JMBG")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_customer(
    State(state): State<crate::AppState>,
    Path(jmbg): Path<String>,
) -> AppResult<StatusCode> {
    state.services.customers.delete(&jmbg).await?;
    Ok(StatusCode::NO_CONTENT)
}
