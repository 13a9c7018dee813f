use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate_not_blank;
use crate::models::{Category, Competitor, CompetitorWithCategory};

/// Request payload for creating or updating a competitor
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(
        min = 1,
        max = 50,
        message = "First name must be between 1 and 50 characters"
    ))]
    pub first_name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Last name must be between 1 and 50 characters"
    ))]
    pub last_name: String,

    /// A missing id deserializes as 0, which never matches a category.
    #[serde(default)]
    pub category_id: i32,
}

impl CompetitorRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, category_id: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            category_id,
        }
    }
}

/// Competitor representation with its category attached when loaded.
/// The attached category never lists its competitors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub category_id: i32,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
    pub is_deleted: bool,
    pub category: Option<Category>,
}

impl From<Competitor> for CompetitorResponse {
    fn from(competitor: Competitor) -> Self {
        Self {
            id: competitor.id,
            first_name: competitor.first_name,
            last_name: competitor.last_name,
            category_id: competitor.category_id,
            created_date: competitor.created_date,
            modified_date: competitor.modified_date,
            is_deleted: competitor.is_deleted,
            category: None,
        }
    }
}

impl From<CompetitorWithCategory> for CompetitorResponse {
    fn from(detail: CompetitorWithCategory) -> Self {
        Self {
            category: detail.category,
            ..Self::from(detail.competitor)
        }
    }
}
