//! Repository implementations for database access

pub mod users;

pub use users::UserRepo;

/// Failure reported by the store.
///
/// Carries the driver error unchanged; callers decide what it means.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl StoreError {
    /// True when a UNIQUE (or primary key) constraint rejected the write.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.is_unique_violation(),
            Self::Sqlx(_) => false,
        }
    }

    /// True when a FOREIGN KEY constraint rejected the write.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.is_foreign_key_violation(),
            Self::Sqlx(_) => false,
        }
    }
}
