use axum::{Router, routing::get};
use storage::SharedCatalog;

use super::handlers::{
    create_competitor, delete_competitor, get_competitor, list_competitors,
    list_competitors_by_category, update_competitor,
};

pub fn routes() -> Router<SharedCatalog> {
    Router::new()
        .route("/", get(list_competitors).post(create_competitor))
        .route("/categories/:category_id", get(list_competitors_by_category))
        .route(
            "/:id",
            get(get_competitor)
                .put(update_competitor)
                .delete(delete_competitor),
        )
}
