//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not blueprint
//! rules. Blueprint errors are `DomainError` from `crate::domain`.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. The tree may be partially written.
    #[error("Failed to {operation} at {}: {reason}", .path.display())]
    FilesystemError {
        path: PathBuf,
        operation: &'static str,
        kind: ErrorKind,
        reason: String,
    },
}

impl ApplicationError {
    /// Build a [`ApplicationError::FilesystemError`] from an I/O error.
    pub fn filesystem(
        path: impl Into<PathBuf>,
        operation: &'static str,
        err: &std::io::Error,
    ) -> Self {
        Self::FilesystemError {
            path: path.into(),
            operation,
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, kind, .. } => {
                let mut hints = vec![format!("Failed to access: {}", path.display())];
                match kind {
                    ErrorKind::PermissionDenied => {
                        hints.push("Check that you have write permission for the target directory".into())
                    }
                    ErrorKind::NotFound => {
                        hints.push("Ensure the base directory exists".into())
                    }
                    _ => hints.push("Check the path is valid and the disk has free space".into()),
                }
                hints.push("Files written before the failure were left in place".into());
                hints
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
        }
    }
}
