//! Admins API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        admin::{CreateAdmin, UpdateAdmin},
        Admin,
    },
};

/// List all admins
#[utoipa::path(
    get,
    path = "/admins",
    tag = "admins",
    responses(
        (status = 200, description = "List of admins", body = Vec<Admin>)
    )
)]
pub async fn list_admins(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Admin>>> {
    let admins = state.services.admins.get_all().await?;
    Ok(Json(admins))
}

/// Get admin by ID
#[utoipa::path(
    get,
    path = "/admins/{admin_id}",
    tag = "admins",
    params(("admin_id" = String, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin", body = Admin),
        (status = 404, description = "Admin not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_admin(
    State(state): State<crate::AppState>,
    Path(admin_id): Path<String>,
) -> AppResult<Json<Admin>> {
    let admin = state.services.admins.get_one(&admin_id).await?;
    Ok(Json(admin))
}

/// Create an admin
#[utoipa::path(
    post,
    path = "/admins",
    tag = "admins",
    request_body = CreateAdmin,
    responses(
        (status = 201, description = "Admin created", body = Admin),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse),
        (status = 409, description = "Admin already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_admin(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAdmin>,
) -> AppResult<(StatusCode, Json<Admin>)> {
    let admin = state.services.admins.create(data).await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

/// Update an admin
#[utoipa::path(
    put,
    path = "/admins/{admin_id}",
    tag = "admins",
    params(("admin_id" = String, Path, description = "Admin ID")),
    request_body = UpdateAdmin,
    responses(
        (status = 200, description = "Admin updated", body = Admin),
        (status = 404, description = "Admin not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_admin(
    State(state): State<crate::AppState>,
    Path(admin_id): Path<String>,
    Json(data): Json<UpdateAdmin>,
) -> AppResult<Json<Admin>> {
    let admin = state.services.admins.update(&admin_id, data).await?;
    Ok(Json(admin))
}

/// Delete an admin
#[utoipa::path(
    delete,
    path = "/admins/{admin_id}",
    tag = "admins",
    params(("admin_id" = String, Path, description = "Admin ID")),
    responses(
        (status = 204, description = "Admin deleted"),
        (status = 404, description = "Admin not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_admin(
    State(state): State<crate::AppState>,
    Path(admin_id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.admins.delete(&admin_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
