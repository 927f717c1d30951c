// ============================================================================
// domain/error.rs - BLUEPRINT INVARIANT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors describe a malformed blueprint. The built-in blueprint is
/// static data, so in practice these surface only from hand-built blueprints
/// (tests, future template additions).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    #[error("Blueprint '{name}' has no entries")]
    EmptyBlueprint { name: String },

    #[error("Duplicate path in blueprint: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicatePath { path } => vec![
                format!("'{}' is declared more than once", path),
                "Each directory and file may appear only once in a blueprint".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
            ],
            Self::EmptyBlueprint { name } => vec![
                format!("Blueprint '{}' is empty", name),
                "Add at least one directory or file".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
