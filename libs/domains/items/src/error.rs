use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Faults raised by an [`ItemRepository`](crate::repository::ItemRepository).
///
/// These never leave the service layer; [`ItemService`](crate::service::ItemService)
/// translates each of them into an [`ItemError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Item with key '{0}' not found.")]
    ItemNotFound(String),

    #[error("Failed to add item with value '{0}'.")]
    FailedToAdd(String),

    #[error("Failed to update item with key '{0}'.")]
    FailedToUpdate(String),

    #[error("Failed to delete item with key '{0}'.")]
    FailedToDelete(String),

    #[error("Failed to list items: {0}")]
    FailedToList(String),

    #[error("Failed to count items: {0}")]
    FailedToCount(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by the item service to its callers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    /// The client sent input that cannot be processed
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The id does not resolve to a live item
    #[error("Item with key '{0}' not found.")]
    NotFound(String),

    /// Any storage fault or unexpected failure
    #[error("Server error: {0}")]
    Server(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::NotFound(id) => {
                AppError::NotFound(format!("Item with key '{}' not found.", id))
            }
            ItemError::Server(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ItemError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ItemError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ItemError::Server("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
