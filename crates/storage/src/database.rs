use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::catalog::Catalog;
use crate::dto::category::CategoryRequest;
use crate::dto::competitor::CompetitorRequest;
use crate::error::Result;
use crate::models::{Category, CategoryWithCompetitors, Competitor, CompetitorWithCategory};
use crate::repository::category::CategoryRepository;
use crate::repository::competitor::CompetitorRepository;
use crate::seed;

/// Postgres-backed catalog. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Load the fixed seed rows. Rows whose id already exists are left alone,
    /// so running this on every startup only inserts them once.
    pub async fn seed(&self) -> Result<()> {
        for category in seed::categories() {
            sqlx::query(
                r#"
                INSERT INTO categories (id, name, created_date, modified_date, is_deleted)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(category.id)
            .bind(&category.name)
            .bind(category.created_date)
            .bind(category.modified_date)
            .bind(category.is_deleted)
            .execute(&self.pool)
            .await?;
        }

        for competitor in seed::competitors() {
            sqlx::query(
                r#"
                INSERT INTO competitors (id, first_name, last_name, category_id, created_date, modified_date, is_deleted)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(competitor.id)
            .bind(&competitor.first_name)
            .bind(&competitor.last_name)
            .bind(competitor.category_id)
            .bind(competitor.created_date)
            .bind(competitor.modified_date)
            .bind(competitor.is_deleted)
            .execute(&self.pool)
            .await?;
        }

        // Explicit ids bypass the identity sequences; move them past the seed.
        for table in ["categories", "competitors"] {
            sqlx::query(&format!(
                "SELECT setval(pg_get_serial_sequence('{table}', 'id'), GREATEST((SELECT MAX(id) FROM {table}), 1))"
            ))
            .execute(&self.pool)
            .await?;
        }

        tracing::debug!("Seed data applied");
        Ok(())
    }
}

#[async_trait]
impl Catalog for Database {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        CategoryRepository::new(&self.pool).list().await
    }

    async fn get_category(&self, id: i32) -> Result<Option<CategoryWithCompetitors>> {
        CategoryRepository::new(&self.pool)
            .find_by_id_with_competitors(id)
            .await
    }

    async fn category_exists(&self, id: i32) -> Result<bool> {
        CategoryRepository::new(&self.pool).exists(id).await
    }

    async fn create_category(&self, req: &CategoryRequest) -> Result<Category> {
        CategoryRepository::new(&self.pool).create(req).await
    }

    async fn update_category(&self, id: i32, req: &CategoryRequest) -> Result<Option<Category>> {
        CategoryRepository::new(&self.pool).update(id, req).await
    }

    async fn soft_delete_category(&self, id: i32) -> Result<bool> {
        CategoryRepository::new(&self.pool).soft_delete(id).await
    }

    async fn list_competitors(&self) -> Result<Vec<CompetitorWithCategory>> {
        CompetitorRepository::new(&self.pool).list().await
    }

    async fn list_competitors_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<CompetitorWithCategory>> {
        CompetitorRepository::new(&self.pool)
            .list_by_category(category_id)
            .await
    }

    async fn get_competitor(&self, id: i32) -> Result<Option<CompetitorWithCategory>> {
        CompetitorRepository::new(&self.pool)
            .find_by_id_with_category(id)
            .await
    }

    async fn create_competitor(&self, req: &CompetitorRequest) -> Result<Competitor> {
        CompetitorRepository::new(&self.pool).create(req).await
    }

    async fn update_competitor(
        &self,
        id: i32,
        req: &CompetitorRequest,
    ) -> Result<Option<Competitor>> {
        CompetitorRepository::new(&self.pool).update(id, req).await
    }

    async fn soft_delete_competitor(&self, id: i32) -> Result<bool> {
        CompetitorRepository::new(&self.pool).soft_delete(id).await
    }
}
