use sea_orm::DbErr;
use thiserror::Error;

/// Errors returned by the course services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Course {0} not found")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    /// Maps a failed write on course `id`, treating a row that vanished mid-update as not found
    pub fn from_update(id: i32, err: DbErr) -> Self {
        match err {
            DbErr::RecordNotUpdated => Self::NotFound(id),
            other => Self::Database(other),
        }
    }
}
