// ============================================================================
// domain/error.rs - MODULE LAYOUT ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    #[error("Unknown layer: {0}")]
    UnknownLayer(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Duplicate directory in module plan: {path}")]
    DuplicateDirectory { path: String },

    #[error("Directory '{path}' escapes the module root")]
    OutsideModuleRoot { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModuleName { name, .. } if name.trim().is_empty() => vec![
                "The name must not be empty".into(),
                "Example: strata new login".into(),
            ],
            Self::InvalidModuleName { .. } => vec![
                "Use a single directory name such as 'login' or 'user_profile'".into(),
                "Path separators and '.'/'..' are not allowed".into(),
            ],
            Self::UnknownLayer(_) => vec![
                "Known layers: infrastructure, domain, presentation".into(),
                "Try: strata layers".into(),
            ],
            _ => vec!["This is a bug in the module plan, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModuleName { .. } => ErrorCategory::Validation,
            Self::UnknownLayer(_) => ErrorCategory::NotFound,
            Self::DuplicateDirectory { .. } | Self::OutsideModuleRoot { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
