use database::DatabaseError;
use http::StatusCode;
use thiserror::Error;

use crate::models::ProductId;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] DatabaseError),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Transport status for this error. Pure; logs nothing.
    ///
    /// A missing product is 404 rather than a generic 500; only storage
    /// faults are server errors.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ProductError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Final translation at the transport edge: consumes the error and logs
    /// storage faults at `error` level, once.
    pub fn into_status(self) -> StatusCode {
        if let ProductError::Storage(err) = &self {
            tracing::error!(error = %err, "Storage failure");
        }
        self.status_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_has_its_own_status() {
        assert_eq!(ProductError::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ProductError::InvalidArgument("page_size".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProductError::Storage(DatabaseError::ConnectionFailed("io".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_status_lookup_is_repeatable() {
        let err = ProductError::Storage(DatabaseError::ConnectionFailed("io".to_string()));
        assert_eq!(err.status_code(), err.status_code());
        assert_eq!(err.into_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_status_matches_status_code() {
        let errors = [
            ProductError::NotFound(3),
            ProductError::InvalidArgument("page_size".to_string()),
            ProductError::Storage(DatabaseError::MigrationError("x".to_string())),
        ];
        for err in errors {
            let expected = err.status_code();
            assert_eq!(err.into_status(), expected);
        }
    }

    #[test]
    fn test_db_err_reaches_storage_through_database_error() {
        let err: ProductError =
            DatabaseError::from(sea_orm::DbErr::Custom("constraint".to_string())).into();
        assert!(matches!(err, ProductError::Storage(DatabaseError::Postgres(_))));
    }

    #[test]
    fn test_not_found_message_names_the_id() {
        assert_eq!(ProductError::NotFound(42).to_string(), "Product not found: 42");
    }
}
