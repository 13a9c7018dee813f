use axum::Router;
use storage::SharedCatalog;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

use features::{categories, competitors};

#[derive(OpenApi)]
#[openapi(
    paths(
        categories::handlers::list_categories,
        categories::handlers::get_category,
        categories::handlers::create_category,
        categories::handlers::update_category,
        categories::handlers::delete_category,
        competitors::handlers::list_competitors,
        competitors::handlers::get_competitor,
        competitors::handlers::list_competitors_by_category,
        competitors::handlers::create_competitor,
        competitors::handlers::update_competitor,
        competitors::handlers::delete_competitor,
    ),
    components(
        schemas(
            storage::dto::category::CategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::competitor::CompetitorRequest,
            storage::dto::competitor::CompetitorResponse,
            storage::models::Category,
            storage::models::Competitor,
        )
    ),
    tags(
        (name = "categories", description = "Competitor categories"),
        (name = "competitors", description = "Competitors and their category"),
    )
)]
pub struct ApiDoc;

/// Build the HTTP application over the given catalog backend.
pub fn app(catalog: SharedCatalog) -> Router {
    Router::new()
        .nest("/api/categories", categories::routes::routes())
        .nest("/api/competitors", competitors::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(catalog)
}
