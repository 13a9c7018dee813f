use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate_not_blank;
use crate::models::{Category, CategoryWithCompetitors, Competitor};

/// Request payload for creating or renaming a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

impl CategoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Category representation. `competitors` is only populated when a single
/// category is fetched; the nested competitors never carry their category back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
    pub is_deleted: bool,
    pub competitors: Vec<Competitor>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_date: category.created_date,
            modified_date: category.modified_date,
            is_deleted: category.is_deleted,
            competitors: Vec::new(),
        }
    }
}

impl From<CategoryWithCompetitors> for CategoryResponse {
    fn from(detail: CategoryWithCompetitors) -> Self {
        Self {
            competitors: detail.competitors,
            ..Self::from(detail.category)
        }
    }
}
