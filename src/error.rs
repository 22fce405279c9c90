//! Error types for student record operations.

use sea_orm::DbErr;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

/// Errors returned by the student repository and enrollment helpers.
#[derive(Debug, thiserror::Error)]
pub enum StudentError {
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("A student with dni {dni} or email {email} already exists")]
    Duplicate { dni: i64, email: String },

    #[error("Student not found: {0}")]
    NotFound(i32),

    #[error("Invalid page request: page {page}, page size {page_size} (page must be at least 1, page size between 1 and i64::MAX)")]
    InvalidPage { page: u64, page_size: u64 },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StudentError {
    /// Fields that failed validation, empty for every other variant.
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            StudentError::Validation(errors) => errors.iter().map(|e| e.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

pub type Result<T> = std::result::Result<T, StudentError>;
