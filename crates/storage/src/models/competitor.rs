use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub category_id: i32,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
    pub is_deleted: bool,
}

/// A competitor with its category attached.
///
/// `category` is `None` when the referenced category has been soft-deleted;
/// the competitor itself stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorWithCategory {
    pub competitor: Competitor,
    pub category: Option<Category>,
}

/// Flat row produced by joining `competitors` with `categories`.
#[derive(Debug, FromRow)]
pub(crate) struct CompetitorCategoryRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub category_id: i32,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
    pub is_deleted: bool,
    pub category_name: Option<String>,
    pub category_created_date: Option<NaiveDateTime>,
    pub category_modified_date: Option<NaiveDateTime>,
}

impl From<CompetitorCategoryRow> for CompetitorWithCategory {
    fn from(row: CompetitorCategoryRow) -> Self {
        let category = match (
            row.category_name,
            row.category_created_date,
            row.category_modified_date,
        ) {
            (Some(name), Some(created_date), Some(modified_date)) => Some(Category {
                id: row.category_id,
                name,
                created_date,
                modified_date,
                is_deleted: false,
            }),
            _ => None,
        };

        Self {
            competitor: Competitor {
                id: row.id,
                first_name: row.first_name,
                last_name: row.last_name,
                category_id: row.category_id,
                created_date: row.created_date,
                modified_date: row.modified_date,
                is_deleted: row.is_deleted,
            },
            category,
        }
    }
}
