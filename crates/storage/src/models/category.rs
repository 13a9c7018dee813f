use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Competitor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
    pub is_deleted: bool,
}

/// A category together with its live competitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithCompetitors {
    pub category: Category,
    pub competitors: Vec<Competitor>,
}
