use sqlx::PgPool;
use validator::Validate;

use crate::audit::{self, AuditStamp};
use crate::dto::category::CategoryRequest;
use crate::error::Result;
use crate::models::{Category, CategoryWithCompetitors, Competitor};

/// Repository for Category database operations
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new CategoryRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all live categories
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_date, modified_date, is_deleted
            FROM categories
            WHERE is_deleted = FALSE
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a live category by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_date, modified_date, is_deleted
            FROM categories
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Get a live category with its live competitors
    pub async fn find_by_id_with_competitors(
        &self,
        id: i32,
    ) -> Result<Option<CategoryWithCompetitors>> {
        let Some(category) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let competitors = sqlx::query_as::<_, Competitor>(
            r#"
            SELECT id, first_name, last_name, category_id, created_date, modified_date, is_deleted
            FROM competitors
            WHERE category_id = $1 AND is_deleted = FALSE
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(CategoryWithCompetitors {
            category,
            competitors,
        }))
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1 AND is_deleted = FALSE)",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    /// Create a new category
    pub async fn create(&self, req: &CategoryRequest) -> Result<Category> {
        req.validate()?;
        let stamp = AuditStamp::created();

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, created_date, modified_date, is_deleted)
            VALUES ($1, $2, $3, FALSE)
            RETURNING id, name, created_date, modified_date, is_deleted
            "#,
        )
        .bind(&req.name)
        .bind(stamp.created_date)
        .bind(stamp.modified_date)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    /// Rename a live category; `None` if it does not exist
    pub async fn update(&self, id: i32, req: &CategoryRequest) -> Result<Option<Category>> {
        req.validate()?;
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2,
                modified_date = $3
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING id, name, created_date, modified_date, is_deleted
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(audit::touch(existing.modified_date))
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Flag a live category as deleted; `false` if it does not exist
    pub async fn soft_delete(&self, id: i32) -> Result<bool> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(false);
        };

        let result = sqlx::query(
            r#"
            UPDATE categories
            SET is_deleted = TRUE,
                modified_date = $2
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .bind(audit::touch(existing.modified_date))
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
