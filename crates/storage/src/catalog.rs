use std::sync::Arc;

use async_trait::async_trait;

use crate::dto::category::CategoryRequest;
use crate::dto::competitor::CompetitorRequest;
use crate::error::Result;
use crate::models::{Category, CategoryWithCompetitors, Competitor, CompetitorWithCategory};

/// Persistence gateway for categories and competitors.
///
/// Soft-deleted rows are invisible to every method: they are never listed or
/// returned, and updating or deleting one reports not-found (`None` / `false`).
/// Implementations stamp audit dates through [`crate::audit`] on every write.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn get_category(&self, id: i32) -> Result<Option<CategoryWithCompetitors>>;

    async fn category_exists(&self, id: i32) -> Result<bool>;

    async fn create_category(&self, req: &CategoryRequest) -> Result<Category>;

    async fn update_category(&self, id: i32, req: &CategoryRequest) -> Result<Option<Category>>;

    /// Does not touch the category's competitors.
    async fn soft_delete_category(&self, id: i32) -> Result<bool>;

    async fn list_competitors(&self) -> Result<Vec<CompetitorWithCategory>>;

    async fn list_competitors_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<CompetitorWithCategory>>;

    async fn get_competitor(&self, id: i32) -> Result<Option<CompetitorWithCategory>>;

    /// Fails with [`crate::error::StorageError::ForeignKeyViolation`] when no
    /// category row (live or soft-deleted) has `req.category_id`.
    async fn create_competitor(&self, req: &CompetitorRequest) -> Result<Competitor>;

    async fn update_competitor(
        &self,
        id: i32,
        req: &CompetitorRequest,
    ) -> Result<Option<Competitor>>;

    async fn soft_delete_competitor(&self, id: i32) -> Result<bool>;
}

pub type SharedCatalog = Arc<dyn Catalog>;
