//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StrataError, StrataResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        // `create_dir_all` already treats an existing directory as success.
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error) -> StrataError {
    ApplicationError::DirectoryCreation {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
