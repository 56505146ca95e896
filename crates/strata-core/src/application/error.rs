//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The directory-creation primitive failed for `path`.
    ///
    /// Carries the adapter's own message verbatim.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// Filesystem state access failed (lock poisoned, etc.).
    #[error("Filesystem state is unavailable")]
    FilesystemLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreation { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Directories created before the failure were left in place".into(),
            ],
            Self::FilesystemLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreation { .. } | Self::FilesystemLockError => ErrorCategory::Internal,
        }
    }
}
