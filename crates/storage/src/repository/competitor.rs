use sqlx::PgPool;
use validator::Validate;

use crate::audit::{self, AuditStamp};
use crate::dto::competitor::CompetitorRequest;
use crate::error::{Result, StorageError};
use crate::models::{Competitor, CompetitorCategoryRow, CompetitorWithCategory};

/// Repository for Competitor database operations
pub struct CompetitorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitorRepository<'a> {
    /// Create a new CompetitorRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all live competitors with their category
    pub async fn list(&self) -> Result<Vec<CompetitorWithCategory>> {
        let rows = sqlx::query_as::<_, CompetitorCategoryRow>(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.category_id,
                   c.created_date, c.modified_date, c.is_deleted,
                   cat.name AS category_name,
                   cat.created_date AS category_created_date,
                   cat.modified_date AS category_modified_date
            FROM competitors c
            LEFT JOIN categories cat ON cat.id = c.category_id AND cat.is_deleted = FALSE
            WHERE c.is_deleted = FALSE
            ORDER BY c.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CompetitorWithCategory::from).collect())
    }

    /// List live competitors of one category
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<CompetitorWithCategory>> {
        let rows = sqlx::query_as::<_, CompetitorCategoryRow>(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.category_id,
                   c.created_date, c.modified_date, c.is_deleted,
                   cat.name AS category_name,
                   cat.created_date AS category_created_date,
                   cat.modified_date AS category_modified_date
            FROM competitors c
            LEFT JOIN categories cat ON cat.id = c.category_id AND cat.is_deleted = FALSE
            WHERE c.category_id = $1 AND c.is_deleted = FALSE
            ORDER BY c.id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CompetitorWithCategory::from).collect())
    }

    /// Get a live competitor with its category
    pub async fn find_by_id_with_category(&self, id: i32) -> Result<Option<CompetitorWithCategory>> {
        let row = sqlx::query_as::<_, CompetitorCategoryRow>(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.category_id,
                   c.created_date, c.modified_date, c.is_deleted,
                   cat.name AS category_name,
                   cat.created_date AS category_created_date,
                   cat.modified_date AS category_modified_date
            FROM competitors c
            LEFT JOIN categories cat ON cat.id = c.category_id AND cat.is_deleted = FALSE
            WHERE c.id = $1 AND c.is_deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(CompetitorWithCategory::from))
    }

    /// Get a live competitor by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Competitor>> {
        let competitor = sqlx::query_as::<_, Competitor>(
            r#"
            SELECT id, first_name, last_name, category_id, created_date, modified_date, is_deleted
            FROM competitors
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(competitor)
    }

    /// Create a new competitor
    pub async fn create(&self, req: &CompetitorRequest) -> Result<Competitor> {
        req.validate()?;
        let stamp = AuditStamp::created();

        let competitor = sqlx::query_as::<_, Competitor>(
            r#"
            INSERT INTO competitors (first_name, last_name, category_id, created_date, modified_date, is_deleted)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING id, first_name, last_name, category_id, created_date, modified_date, is_deleted
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.category_id)
        .bind(stamp.created_date)
        .bind(stamp.modified_date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::for_category_reference(e, req.category_id))?;

        Ok(competitor)
    }

    /// Replace all editable fields of a live competitor; `None` if it does not exist
    pub async fn update(&self, id: i32, req: &CompetitorRequest) -> Result<Option<Competitor>> {
        req.validate()?;
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let competitor = sqlx::query_as::<_, Competitor>(
            r#"
            UPDATE competitors
            SET first_name = $2,
                last_name = $3,
                category_id = $4,
                modified_date = $5
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING id, first_name, last_name, category_id, created_date, modified_date, is_deleted
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.category_id)
        .bind(audit::touch(existing.modified_date))
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::for_category_reference(e, req.category_id))?;

        Ok(competitor)
    }

    /// Flag a live competitor as deleted; `false` if it does not exist
    pub async fn soft_delete(&self, id: i32) -> Result<bool> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(false);
        };

        let result = sqlx::query(
            r#"
            UPDATE competitors
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
