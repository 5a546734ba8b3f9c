//! Cities API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        city::{CreateCity, UpdateCity},
        City,
    },
};

/// List all cities
#[utoipa::path(
    get,
    path = "/cities",
    tag = "cities",
    responses(
        (status = 200, description = "List of cities", body = Vec<City>)
    )
)]
pub async fn list_cities(State(state): State<crate::AppState>) -> AppResult<Json<Vec<City>>> {
    let cities = state.services.cities.get_all().await?;
    Ok(Json(cities))
}

/// Get city by postal code
#[utoipa::path(
    get,
    path = "/cities/{postal_code}",
    tag = "cities",
    params(("postal_code" = String, Path, description = "Postal code")),
    responses(
        (status = 200, description = "City", body = City),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_city(
    State(state): State<crate::AppState>,
    Path(postal_code): Path<String>,
) -> AppResult<Json<City>> {
    let city = state.services.cities.get_one(&postal_code).await?;
    Ok(Json(city))
}

/// Create a city
#[utoipa::path(
    post,
    path = "/cities",
    tag = "cities",
    request_body = CreateCity,
    responses(
        (status = 201, description = "City created", body = City),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse),
        (status = 409, description = "Postal code already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_city(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCity>,
) -> AppResult<(StatusCode, Json<City>)> {
    let city = state.services.cities.create(data).await?;
    Ok((StatusCode::CREATED, Json(city)))
}

/// Rename a city
#[utoipa::path(
    put,
    path = "/cities/{postal_code}",
    tag = "cities",
    params(("postal_code" = String, Path, description = "Postal code")),
    request_body = UpdateCity,
    responses(
        (status = 200, description = "City updated", body = City),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_city(
    State(state): State<crate::AppState>,
    Path(postal_code): Path<String>,
    Json(data): Json<UpdateCity>,
) -> AppResult<Json<City>> {
    let city = state.services.cities.update(&postal_code, data).await?;
    Ok(Json(city))
}

/// Delete a city and its addresses
#[utoipa::path(
    delete,
    path = "/cities/{postal_code}",
    tag = "cities",
    params(("postal_code" = String, Path, description = "Postal code")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_city(
    State(state): State<crate::AppState>,
    Path(postal_code): Path<String>,
) -> AppResult<StatusCode> {
    state.services.cities.delete(&postal_code).await?;
    Ok(StatusCode::NO_CONTENT)
}
