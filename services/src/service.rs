use db::StoreError;
use validator::ValidationErrors;

/// Result type for service operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the service layer
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required fields are missing or falsy.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The body is not a JSON object or a known field has the wrong type.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
