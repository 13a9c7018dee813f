use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            StorageError::ForeignKeyViolation(_) => true,
            StorageError::Database(sqlx::Error::Database(e)) => {
                e.code().as_deref() == Some("23503")
            }
            _ => false,
        }
    }

    /// Rewrites a Postgres FK failure on `competitors.category_id` into a
    /// [`StorageError::ForeignKeyViolation`] naming the offending category.
    pub(crate) fn for_category_reference(error: sqlx::Error, category_id: i32) -> Self {
        let error = StorageError::from(error);
        if error.is_foreign_key_violation() {
            return StorageError::ForeignKeyViolation(format!(
                "Category {} does not exist",
                category_id
            ));
        }
        error
    }
}
