use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use storage::{
    SharedCatalog,
    dto::category::{CategoryRequest, CategoryResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List all categories successfully", body = Vec<CategoryResponse>)
    ),
    tag = "categories"
)]
pub async fn list_categories(State(catalog): State<SharedCatalog>) -> Result<Response, WebError> {
    let categories = services::list_categories(catalog.as_ref()).await?;

    let response: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found, with its competitors", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(catalog): State<SharedCatalog>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = path?;
    let category = services::get_category(catalog.as_ref(), id).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(catalog): State<SharedCatalog>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;

    req.validate()?;

    let category = services::create_category(catalog.as_ref(), &req).await?;
    let location = format!("/api/categories/{}", category.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CategoryResponse::from(category)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    request_body = CategoryRequest,
    responses(
        (status = 204, description = "Category updated successfully"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(catalog): State<SharedCatalog>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Path(id) = path?;
    let Json(update_req) = payload?;

    update_req.validate()?;

    services::update_category(catalog.as_ref(), id, &update_req).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 204, description = "Category soft-deleted successfully"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(catalog): State<SharedCatalog>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = path?;
    services::delete_category(catalog.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
