//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use blog_common::AppError;
use blog_core::DomainError;
use thiserror::Error;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or storage failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Application error (password hashing, etc.)
    #[error(transparent)]
    App(#[from] AppError),

    /// Request failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Any of the above, tagged with the operation that raised it
    #[error("{operation}: {source}")]
    Context {
        operation: &'static str,
        source: Box<ServiceError>,
    },
}

impl ServiceError {
    /// Tag the error with an operation name; the innermost tag wins
    pub fn context(self, operation: &'static str) -> Self {
        match self {
            Self::Context { .. } => self,
            other => Self::Context {
                operation,
                source: Box::new(other),
            },
        }
    }

    /// The error with any operation tag removed
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Operation that raised the error, if tagged
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Context { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// Validation details, if this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self.root() {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Domain error, if this wraps one
    pub fn domain(&self) -> Option<&DomainError> {
        match self.root() {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self.root() {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_reference() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
            Self::Context { .. } => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self.root() {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Context { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
