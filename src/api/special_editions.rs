//! Special editions API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{
        CreateSpecialEdition, SpecialEditionDetails, SpecialEditionSummary, UpdateSpecialEdition,
    },
};

/// List special editions
#[utoipa::path(
    get,
    path = "/special-editions",
    tag = "special-editions",
    responses(
        (status = 200, description = "List of special editions", body = Vec<SpecialEditionSummary>)
    )
)]
pub async fn list_special_editions(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<SpecialEditionSummary>>> {
    let editions = state.services.special_editions.get_all().await?;
    Ok(Json(editions))
}

/// Get special edition by ISBN
#[utoipa::path(
    get,
    path = "/special-editions/{isbn}",
    tag = "special-editions",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Special edition details", body = SpecialEditionDetails),
        (status = 404, description = "Special edition not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_special_edition(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<SpecialEditionDetails>> {
    let edition = state.services.special_editions.get_one(&isbn).await?;
    Ok(Json(edition))
}

/// Create a special edition written by an existing author
#[utoipa::path(
    post,
    path = "/special-editions/{author_id}",
    tag = "special-editions",
    params(("author_id" = String, Path, description = "Author ID")),
    request_body = CreateSpecialEdition,
    responses(
        (status = 201, description = "Special edition created", body = SpecialEditionDetails),
        (status = 400, description = "Invalid fields or ISBN", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_special_edition(
    State(state): State<crate::AppState>,
    Path(author_id): Path<String>,
    Json(data): Json<CreateSpecialEdition>,
) -> AppResult<(StatusCode, Json<SpecialEditionDetails>)> {
    let edition = state
        .services
        .special_editions
        .create(&author_id, data)
        .await?;
    Ok((StatusCode::CREATED, Json(edition)))
}

/// Update a special edition
#[utoipa::path(
    put,
    path = "/special-editions/{isbn}",
    tag = "special-editions",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = UpdateSpecialEdition,
    responses(
        (status = 200, description = "Special edition updated", body = SpecialEditionDetails),
        (status = 404, description = "Special edition not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_special_edition(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    Json(data): Json<UpdateSpecialEdition>,
) -> AppResult<Json<SpecialEditionDetails>> {
    let edition = state.services.special_editions.update(&isbn, data).await?;
    Ok(Json(edition))
}

/// Delete a special edition
#[utoipa::path(
    delete,
    path = "/special-editions/{isbn}",
    tag = "special-editions",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 204, description = "Special edition deleted"),
        (status = 404, description = "Special edition not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_special_edition(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<StatusCode> {
    state.services.special_editions.delete(&isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}
