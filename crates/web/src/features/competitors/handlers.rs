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
    dto::competitor::{CompetitorRequest, CompetitorResponse},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitors",
    responses(
        (status = 200, description = "List all competitors with their category", body = Vec<CompetitorResponse>)
    ),
    tag = "competitors"
)]
pub async fn list_competitors(State(catalog): State<SharedCatalog>) -> Result<Response, WebError> {
    let competitors = services::list_competitors(catalog.as_ref()).await?;

    let response: Vec<CompetitorResponse> = competitors
        .into_iter()
        .map(CompetitorResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitors/{id}",
    params(
        ("id" = i32, Path, description = "Competitor id")
    ),
    responses(
        (status = 200, description = "Competitor found", body = CompetitorResponse),
        (status = 404, description = "Competitor not found")
    ),
    tag = "competitors"
)]
pub async fn get_competitor(
    State(catalog): State<SharedCatalog>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = path?;
    let competitor = services::get_competitor(catalog.as_ref(), id).await?;

    Ok(Json(CompetitorResponse::from(competitor)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitors/categories/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Competitors in the category (possibly none)", body = Vec<CompetitorResponse>)
    ),
    tag = "competitors"
)]
pub async fn list_competitors_by_category(
    State(catalog): State<SharedCatalog>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(category_id) = path?;
    let competitors =
        services::list_competitors_by_category(catalog.as_ref(), category_id).await?;

    let response: Vec<CompetitorResponse> = competitors
        .into_iter()
        .map(CompetitorResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitors",
    request_body = CompetitorRequest,
    responses(
        (status = 201, description = "Competitor created successfully", body = CompetitorResponse),
        (status = 400, description = "Unknown category or validation error")
    ),
    tag = "competitors"
)]
pub async fn create_competitor(
    State(catalog): State<SharedCatalog>,
    payload: Result<Json<CompetitorRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;

    let competitor = services::create_competitor(catalog.as_ref(), &req).await?;
    let location = format!("/api/competitors/{}", competitor.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CompetitorResponse::from(competitor)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/competitors/{id}",
    params(
        ("id" = i32, Path, description = "Competitor id")
    ),
    request_body = CompetitorRequest,
    responses(
        (status = 204, description = "Competitor updated successfully"),
        (status = 400, description = "Unknown category or validation error"),
        (status = 404, description = "Competitor not found")
    ),
    tag = "competitors"
)]
pub async fn update_competitor(
    State(catalog): State<SharedCatalog>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CompetitorRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Path(id) = path?;
    let Json(update_req) = payload?;

    services::update_competitor(catalog.as_ref(), id, &update_req).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/competitors/{id}",
    params(
        ("id" = i32, Path, description = "Competitor id")
    ),
    responses(
        (status = 204, description = "Competitor soft-deleted successfully"),
        (status = 404, description = "Competitor not found")
    ),
    tag = "competitors"
)]
pub async fn delete_competitor(
    State(catalog): State<SharedCatalog>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = path?;
    services::delete_competitor(catalog.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
