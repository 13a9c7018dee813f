use storage::{
    Catalog,
    dto::category::CategoryRequest,
    models::{Category, CategoryWithCompetitors},
};

use crate::error::{WebError, WebResult};

/// List all live categories
pub async fn list_categories(catalog: &dyn Catalog) -> WebResult<Vec<Category>> {
    Ok(catalog.list_categories().await?)
}

/// Get a category with its competitors
pub async fn get_category(catalog: &dyn Catalog, id: i32) -> WebResult<CategoryWithCompetitors> {
    catalog.get_category(id).await?.ok_or(WebError::NotFound)
}

/// Create a new category
pub async fn create_category(catalog: &dyn Catalog, request: &CategoryRequest) -> WebResult<Category> {
    let category = catalog.create_category(request).await?;
    tracing::info!(category_id = category.id, "Category created");

    Ok(category)
}

/// Rename a category
pub async fn update_category(
    catalog: &dyn Catalog,
    id: i32,
    request: &CategoryRequest,
) -> WebResult<Category> {
    let category = catalog
        .update_category(id, request)
        .await?
        .ok_or(WebError::NotFound)?;
    tracing::info!(category_id = id, "Category updated");

    Ok(category)
}

/// Soft-delete a category. Its competitors are left untouched.
pub async fn delete_category(catalog: &dyn Catalog, id: i32) -> WebResult<()> {
    if !catalog.soft_delete_category(id).await? {
        return Err(WebError::NotFound);
    }
    tracing::info!(category_id = id, "Category soft-deleted");

    Ok(())
}
