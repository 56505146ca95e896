use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    layout::LAYERS,
    modules_root::resolve_modules_root,
    value_objects::{Layer, ModuleName},
};

/// The ordered set of directories one module needs.
///
/// This is the output of planning. It contains no I/O, only data: the
/// application layer walks [`ModuleArchitecture::requests`] in order and
/// hands each path to the filesystem port.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleArchitecture {
    pub(crate) name: ModuleName,
    pub(crate) modules_root: PathBuf,
    pub(crate) module_root: PathBuf,
    pub(crate) requests: Vec<DirectoryRequest>,
}

impl ModuleArchitecture {
    /// Plan the skeleton of `name` for a caller-supplied target directory.
    ///
    /// Order: modules root, module root, then for each layer its root
    /// followed by its children.
    pub fn plan(name: &ModuleName, target_directory: impl AsRef<Path>) -> Self {
        let modules_root = resolve_modules_root(target_directory);
        let module_root = modules_root.join(name);

        let mut requests = Vec::with_capacity(2 + LAYERS.len() * 4);
        requests.push(DirectoryRequest::new(
            modules_root.clone(),
            DirectoryRole::ModulesRoot,
        ));
        requests.push(DirectoryRequest::new(
            module_root.clone(),
            DirectoryRole::ModuleRoot,
        ));

        for spec in &LAYERS {
            let layer_root = module_root.join(spec.name());
            requests.push(DirectoryRequest::new(
                layer_root.clone(),
                DirectoryRole::LayerRoot(spec.layer),
            ));
            requests.extend(spec.children.iter().map(|child| {
                DirectoryRequest::new(layer_root.join(child), DirectoryRole::LayerChild(spec.layer))
            }));
        }

        Self {
            name: name.clone(),
            modules_root,
            module_root,
            requests,
        }
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    pub fn modules_root(&self) -> &Path {
        &self.modules_root
    }

    pub fn module_root(&self) -> &Path {
        &self.module_root
    }

    pub fn requests(&self) -> &[DirectoryRequest] {
        &self.requests
    }

    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    /// Check the structural invariants of the plan.
    ///
    /// Every path must be unique, and every path other than the modules
    /// root must sit inside the module root.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for request in &self.requests {
            if !seen.insert(request.path.as_path()) {
                return Err(DomainError::DuplicateDirectory {
                    path: request.path.display().to_string(),
                });
            }

            if request.role != DirectoryRole::ModulesRoot
                && !request.path.starts_with(&self.module_root)
            {
                return Err(DomainError::OutsideModuleRoot {
                    path: request.path.display().to_string(),
                });
            }
        }

        Ok(())
    }
}

/// What part of the skeleton a directory is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "layer", rename_all = "snake_case")]
pub enum DirectoryRole {
    ModulesRoot,
    ModuleRoot,
    LayerRoot(Layer),
    LayerChild(Layer),
}

impl fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModulesRoot => f.write_str("modules root"),
            Self::ModuleRoot => f.write_str("module root"),
            Self::LayerRoot(layer) => write!(f, "{layer} layer"),
            Self::LayerChild(layer) => write!(f, "{layer} subdirectory"),
        }
    }
}

/// One directory to create. No identity beyond its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryRequest {
    pub path: PathBuf,
    pub role: DirectoryRole,
}

impl DirectoryRequest {
    pub fn new(path: impl Into<PathBuf>, role: DirectoryRole) -> Self {
        Self {
            path: path.into(),
            role,
        }
    }
}
