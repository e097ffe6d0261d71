use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Carries the user-facing message, e.g. "Person not found".
    #[error("not_found: {0}")]
    NotFound(&'static str),
    #[error("db_error")]
    DbError,
}
