//! In-process catalog backend.
//!
//! Holds both tables behind one lock and applies the same rules as the
//! Postgres repositories: soft-deleted rows are filtered from every query,
//! writes are stamped through [`crate::audit`], and competitors must point at
//! an existing category row.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use validator::Validate;

use crate::audit::{self, AuditStamp};
use crate::catalog::Catalog;
use crate::dto::category::CategoryRequest;
use crate::dto::competitor::CompetitorRequest;
use crate::error::{Result, StorageError};
use crate::models::{Category, CategoryWithCompetitors, Competitor, CompetitorWithCategory};
use crate::seed;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    competitors: BTreeMap<i32, Competitor>,
}

impl Tables {
    fn live_category(&self, id: i32) -> Option<&Category> {
        self.categories.get(&id).filter(|c| !c.is_deleted)
    }

    fn live_competitor(&self, id: i32) -> Option<&Competitor> {
        self.competitors.get(&id).filter(|c| !c.is_deleted)
    }

    fn with_category(&self, competitor: &Competitor) -> CompetitorWithCategory {
        CompetitorWithCategory {
            competitor: competitor.clone(),
            category: self.live_category(competitor.category_id).cloned(),
        }
    }

    /// Mirrors the FK: any category row counts, soft-deleted or not.
    fn check_category_reference(&self, category_id: i32) -> Result<()> {
        if self.categories.contains_key(&category_id) {
            Ok(())
        } else {
            Err(StorageError::ForeignKeyViolation(format!(
                "Category {} does not exist",
                category_id
            )))
        }
    }

    fn next_id<T>(rows: &BTreeMap<i32, T>) -> i32 {
        rows.keys().next_back().map_or(1, |id| id + 1)
    }
}

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    tables: RwLock<Tables>,
}

impl MemoryCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the same seed rows as a freshly provisioned database.
    pub fn seeded() -> Self {
        let tables = Tables {
            categories: seed::categories().into_iter().map(|c| (c.id, c)).collect(),
            competitors: seed::competitors().into_iter().map(|c| (c.id, c)).collect(),
        };

        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .filter(|c| !c.is_deleted)
            .cloned()
            .collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<CategoryWithCompetitors>> {
        let tables = self.tables.read().await;
        let Some(category) = tables.live_category(id) else {
            return Ok(None);
        };

        let competitors = tables
            .competitors
            .values()
            .filter(|c| c.category_id == id && !c.is_deleted)
            .cloned()
            .collect();

        Ok(Some(CategoryWithCompetitors {
            category: category.clone(),
            competitors,
        }))
    }

    async fn category_exists(&self, id: i32) -> Result<bool> {
        Ok(self.tables.read().await.live_category(id).is_some())
    }

    async fn create_category(&self, req: &CategoryRequest) -> Result<Category> {
        req.validate()?;
        let stamp = AuditStamp::created();

        let mut tables = self.tables.write().await;
        let category = Category {
            id: Tables::next_id(&tables.categories),
            name: req.name.clone(),
            created_date: stamp.created_date,
            modified_date: stamp.modified_date,
            is_deleted: false,
        };
        tables.categories.insert(category.id, category.clone());

        Ok(category)
    }

    async fn update_category(&self, id: i32, req: &CategoryRequest) -> Result<Option<Category>> {
        req.validate()?;

        let mut tables = self.tables.write().await;
        let Some(category) = tables.categories.get_mut(&id).filter(|c| !c.is_deleted) else {
            return Ok(None);
        };
        category.name = req.name.clone();
        category.modified_date = audit::touch(category.modified_date);

        Ok(Some(category.clone()))
    }

    async fn soft_delete_category(&self, id: i32) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let Some(category) = tables.categories.get_mut(&id).filter(|c| !c.is_deleted) else {
            return Ok(false);
        };
        category.is_deleted = true;
        category.modified_date = audit::touch(category.modified_date);

        Ok(true)
    }

    async fn list_competitors(&self) -> Result<Vec<CompetitorWithCategory>> {
        let tables = self.tables.read().await;
        Ok(tables
            .competitors
            .values()
            .filter(|c| !c.is_deleted)
            .map(|c| tables.with_category(c))
            .collect())
    }

    async fn list_competitors_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<CompetitorWithCategory>> {
        let tables = self.tables.read().await;
        Ok(tables
            .competitors
            .values()
            .filter(|c| c.category_id == category_id && !c.is_deleted)
            .map(|c| tables.with_category(c))
            .collect())
    }

    async fn get_competitor(&self, id: i32) -> Result<Option<CompetitorWithCategory>> {
        let tables = self.tables.read().await;
        Ok(tables.live_competitor(id).map(|c| tables.with_category(c)))
    }

    async fn create_competitor(&self, req: &CompetitorRequest) -> Result<Competitor> {
        req.validate()?;
        let stamp = AuditStamp::created();

        let mut tables = self.tables.write().await;
        tables.check_category_reference(req.category_id)?;

        let competitor = Competitor {
            id: Tables::next_id(&tables.competitors),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            category_id: req.category_id,
            created_date: stamp.created_date,
            modified_date: stamp.modified_date,
            is_deleted: false,
        };
        tables.competitors.insert(competitor.id, competitor.clone());

        Ok(competitor)
    }

    async fn update_competitor(
        &self,
        id: i32,
        req: &CompetitorRequest,
    ) -> Result<Option<Competitor>> {
        req.validate()?;

        let mut tables = self.tables.write().await;
        if tables.live_competitor(id).is_none() {
            return Ok(None);
        }
        tables.check_category_reference(req.category_id)?;

        let Some(competitor) = tables.competitors.get_mut(&id) else {
            return Ok(None);
        };
        competitor.first_name = req.first_name.clone();
        competitor.last_name = req.last_name.clone();
        competitor.category_id = req.category_id;
        competitor.modified_date = audit::touch(competitor.modified_date);

        Ok(Some(competitor.clone()))
    }

    async fn soft_delete_competitor(&self, id: i32) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let Some(competitor) = tables.competitors.get_mut(&id).filter(|c| !c.is_deleted) else {
            return Ok(false);
        };
        competitor.is_deleted = true;
        competitor.modified_date = audit::touch(competitor.modified_date);

        Ok(true)
    }
}
