//! Addresses API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        address::{AddressQuery, CreateAddress, UpdateAddress},
        Address,
    },
};

/// List all addresses
#[utoipa::path(
    get,
    path = "/addresses",
    tag = "addresses",
    responses(
        (status = 200, description = "List of addresses", body = Vec<Address>)
    )
)]
pub async fn list_addresses(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Address>>> {
    let addresses = state.services.addresses.get_all().await?;
    Ok(Json(addresses))
}

/// Get address by ID
#[utoipa::path(
    get,
    path = "/addresses/{id}",
    tag = "addresses",
    params(("id" = String, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Address", body = Address),
        (status = 404, description = "Address not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_address(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Address>> {
    let address = state.services.addresses.get_one(&id).await?;
    Ok(Json(address))
}

/// Create an address in an existing city
#[utoipa::path(
    post,
    path = "/addresses/{postal_code}",
    tag = "addresses",
    params(("postal_code" = String, Path, description = "Postal code of the city")),
    request_body = CreateAddress,
    responses(
        (status = 201, description = "Address created", body = Address),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_address(
    State(state): State<crate::AppState>,
    Path(postal_code): Path<String>,
    Json(data): Json<CreateAddress>,
) -> AppResult<(StatusCode, Json<Address>)> {
    let address = state.services.addresses.create(&postal_code, data).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// Update an address, optionally moving it to another city
#[utoipa::path(
    put,
    path = "/addresses/{id}",
    tag = "addresses",
    params(
        ("id" = String, Path, description = "Address ID"),
        AddressQuery
    ),
    request_body = UpdateAddress,
    responses(
        (status = 200, description = "Address updated", body = Address),
        (status = 404, description = "Address or city not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_address(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Query(query): Query<AddressQuery>,
    Json(data): Json<UpdateAddress>,
) -> AppResult<Json<Address>> {
    let address = state
        .services
        .addresses
        .update(&id, query.postal_code.as_deref(), data)
        .await?;
    Ok(Json(address))
}

/// Delete an address
#[utoipa::path(
    delete,
    path = "/addresses/{id}",
    tag = "addresses",
    params(("id" = String, Path, description = "Address ID")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "Address not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_address(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.addresses.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
