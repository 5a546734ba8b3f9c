//! Authors API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::author::{AuthorDetails, AuthorSummary, CreateAuthor, UpdateAuthor},
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = Vec<AuthorSummary>)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<AuthorSummary>>> {
    let authors = state.services.authors.get_all().await?;
    Ok(Json(authors))
}

/// Get author with their books
#[utoipa::path(
    get,
    path = "/authors/{author_id}",
    tag = "authors",
    params(("author_id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorDetails),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(author_id): Path<String>,
) -> AppResult<Json<AuthorDetails>> {
    let author = state.services.authors.get_one(&author_id).await?;
    Ok(Json(author))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = AuthorDetails),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse),
        (status = 409, description = "Author already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<AuthorDetails>)> {
    let author = state.services.authors.create(data).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/authors/{author_id}",
    tag = "authors",
    params(("author_id" = String, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = AuthorDetails),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(author_id): Path<String>,
    Json(data): Json<UpdateAuthor>,
) -> AppResult<Json<AuthorDetails>> {
    let author = state.services.authors.update(&author_id, data).await?;
    Ok(Json(author))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{author_id}",
    tag = "authors",
    params(("author_id" = String, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(author_id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(&author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
