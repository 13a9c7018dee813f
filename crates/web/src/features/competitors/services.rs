use storage::{
    Catalog,
    dto::competitor::CompetitorRequest,
    models::{Competitor, CompetitorWithCategory},
};
use validator::Validate;

use crate::error::{WebError, WebResult};

/// Competitors may only point at a live category. Checked before any write so
/// a bad reference is a client error rather than a storage failure.
async fn ensure_category_exists(catalog: &dyn Catalog, category_id: i32) -> WebResult<()> {
    if catalog.category_exists(category_id).await? {
        Ok(())
    } else {
        Err(WebError::MissingCategory(category_id))
    }
}

/// List all live competitors
pub async fn list_competitors(catalog: &dyn Catalog) -> WebResult<Vec<CompetitorWithCategory>> {
    Ok(catalog.list_competitors().await?)
}

/// List the live competitors of one category
pub async fn list_competitors_by_category(
    catalog: &dyn Catalog,
    category_id: i32,
) -> WebResult<Vec<CompetitorWithCategory>> {
    Ok(catalog.list_competitors_by_category(category_id).await?)
}

/// Get a competitor with its category
pub async fn get_competitor(catalog: &dyn Catalog, id: i32) -> WebResult<CompetitorWithCategory> {
    catalog.get_competitor(id).await?.ok_or(WebError::NotFound)
}

/// Create a new competitor
pub async fn create_competitor(
    catalog: &dyn Catalog,
    request: &CompetitorRequest,
) -> WebResult<Competitor> {
    ensure_category_exists(catalog, request.category_id).await?;
    request.validate()?;

    let competitor = catalog.create_competitor(request).await?;
    tracing::info!(
        competitor_id = competitor.id,
        category_id = competitor.category_id,
        "Competitor created"
    );

    Ok(competitor)
}

/// Replace a competitor's names and category
pub async fn update_competitor(
    catalog: &dyn Catalog,
    id: i32,
    request: &CompetitorRequest,
) -> WebResult<Competitor> {
    if catalog.get_competitor(id).await?.is_none() {
        return Err(WebError::NotFound);
    }
    ensure_category_exists(catalog, request.category_id).await?;
    request.validate()?;

    let competitor = catalog
        .update_competitor(id, request)
        .await?
        .ok_or(WebError::NotFound)?;
    tracing::info!(competitor_id = id, "Competitor updated");

    Ok(competitor)
}

/// Soft-delete a competitor
pub async fn delete_competitor(catalog: &dyn Catalog, id: i32) -> WebResult<()> {
    if !catalog.soft_delete_competitor(id).await? {
        return Err(WebError::NotFound);
    }
    tracing::info!(competitor_id = id, "Competitor soft-deleted");

    Ok(())
}
