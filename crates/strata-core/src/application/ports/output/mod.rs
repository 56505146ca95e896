//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use crate::error::StrataResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` is the only mutating operation the core needs
/// - Creating a directory that already exists is success, not an error
/// - Failures are reported as `ApplicationError::DirectoryCreation`
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
