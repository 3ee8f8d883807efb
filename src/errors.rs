use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::error;
use utoipa::ToSchema;

/// Postgres error codes the repository layer classifies.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Error classification shared by the repository and service layers.
///
/// The repository assigns a kind exactly once when translating a store
/// failure; services attach operation context via [`AppError::context`]
/// without changing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed filter or payload value, caught before reaching the store.
    InvalidInput,
    /// The target entity does not exist (read/update/delete).
    NotFound,
    /// A uniqueness constraint was violated on create.
    AlreadyExists,
    /// Any unclassified store failure, including connectivity and timeout.
    Storage,
}

#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

/// Standard error response format
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type code (e.g., "VALIDATION_ERROR", "NOT_FOUND")
    #[schema(example = "VALIDATION_ERROR")]
    pub error: String,
    /// Human-readable error message
    #[schema(example = "Invalid input provided")]
    pub message: String,
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::AlreadyExists,
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Storage,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prepends an operation label, preserving the classification.
    pub fn context(self, op: &str) -> Self {
        Self {
            kind: self.kind,
            message: format!("{op}: {}", self.message),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidInput => write!(f, "Invalid input: {}", self.message),
            ErrorKind::NotFound => write!(f, "Not found: {}", self.message),
            ErrorKind::AlreadyExists => write!(f, "Already exists: {}", self.message),
            ErrorKind::Storage => write!(f, "Storage error: {}", self.message),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_type, message) = match self.kind {
            ErrorKind::InvalidInput => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.message.clone(),
            ),
            ErrorKind::NotFound => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.message.clone(),
            ),
            ErrorKind::AlreadyExists => (
                actix_web::http::StatusCode::CONFLICT,
                "CONFLICT",
                self.message.clone(),
            ),
            ErrorKind::Storage => {
                // Log the actual error for debugging, but don't expose to client
                error!("Storage error: {}", self.message);
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message,
        })
    }
}

/// The single point where store-native failures are classified into the
/// domain taxonomy. Nothing above this leaks sqlx error representations.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("no matching row"),
            sqlx::Error::Database(db) => match db.code().as_deref() {
                Some(UNIQUE_VIOLATION) => AppError::already_exists(db.message().to_string()),
                Some(FOREIGN_KEY_VIOLATION) => {
                    AppError::not_found("referenced row does not exist")
                }
                _ => AppError::storage(err.to_string()),
            },
            _ => AppError::storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn pool_timeout_maps_to_storage() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[test]
    fn context_preserves_kind_and_prepends_label() {
        let err = AppError::not_found("item not found").context("update item");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "update item: item not found");
    }

    #[test]
    fn context_can_be_layered() {
        let err = AppError::already_exists("duplicate name")
            .context("create category")
            .context("service.category.create");
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(
            err.message(),
            "service.category.create: create category: duplicate name"
        );
    }
}
