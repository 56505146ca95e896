//! Integration tests for strata-core, through the public prelude only.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use strata_core::{application::ApplicationError, prelude::*};

/// Minimal filesystem fake: a set of directories, with `create_dir_all`
/// inserting every ancestor.
#[derive(Clone, Default)]
struct FakeFilesystem {
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    deny: Option<PathBuf>,
}

impl FakeFilesystem {
    fn denying(path: impl Into<PathBuf>) -> Self {
        Self {
            deny: Some(path.into()),
            ..Self::default()
        }
    }

    fn snapshot(&self) -> BTreeSet<PathBuf> {
        self.dirs.lock().unwrap().clone()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        if self.deny.as_deref() == Some(path) {
            return Err(ApplicationError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: "Permission denied (os error 13)".into(),
            }
            .into());
        }

        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}

fn expected_module_dirs(module_root: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![module_root.to_path_buf()];
    for spec in &LAYERS {
        let layer_root = module_root.join(spec.name());
        dirs.push(layer_root.clone());
        dirs.extend(spec.children.iter().map(|c| layer_root.join(c)));
    }
    dirs
}

#[test]
fn test_full_build_workflow() {
    let fs = FakeFilesystem::default();
    let service = ArchitectureService::new(Box::new(fs.clone()));
    let name = ModuleName::new("Login").unwrap();

    let report = service.build(&name, "/project").unwrap();

    assert_eq!(report.module_root, PathBuf::from("/project/modules/Login"));
    let dirs = fs.snapshot();
    let expected = expected_module_dirs(Path::new("/project/modules/Login"));
    assert_eq!(expected.len(), 13);
    for dir in &expected {
        assert!(dirs.contains(dir), "missing {}", dir.display());
    }
}

#[test]
fn test_build_twice_is_idempotent() {
    let fs = FakeFilesystem::default();
    let service = ArchitectureService::new(Box::new(fs.clone()));
    let name = ModuleName::new("Login").unwrap();

    let first = service.build(&name, "/project").unwrap();
    let after_first = fs.snapshot();
    let second = service.build(&name, "/project").unwrap();

    assert_eq!(after_first, fs.snapshot());
    assert_eq!(first.created, 14);
    assert_eq!(second.created, 0);
    assert_eq!(second.existing, 14);
}

#[test]
fn test_build_inside_modules_directory() {
    let fs = FakeFilesystem::default();
    let service = ArchitectureService::new(Box::new(fs.clone()));
    let name = ModuleName::new("Login").unwrap();

    service.build(&name, "/project/modules").unwrap();

    let dirs = fs.snapshot();
    assert!(dirs.contains(Path::new("/project/modules/Login/domain/usecases")));
    assert!(!dirs.iter().any(|d| d.starts_with("/project/modules/modules")));
}

#[test]
fn test_failure_leaves_partial_tree() {
    let fs = FakeFilesystem::denying("/project/modules/Login/domain");
    let service = ArchitectureService::new(Box::new(fs.clone()));
    let name = ModuleName::new("Login").unwrap();

    let err = service.build(&name, "/project").unwrap_err();
    assert!(err.to_string().contains("Permission denied"));

    let dirs = fs.snapshot();
    for child in ["datasources", "models", "repositories"] {
        assert!(dirs.contains(&PathBuf::from("/project/modules/Login/infrastructure").join(child)));
    }
    assert!(!dirs.contains(Path::new("/project/modules/Login/domain")));
    assert!(!dirs.contains(Path::new("/project/modules/Login/presentation")));
}

#[test]
fn test_two_modules_share_one_modules_root() {
    let fs = FakeFilesystem::default();
    let service = ArchitectureService::new(Box::new(fs.clone()));

    service
        .build(&ModuleName::new("login").unwrap(), "/project")
        .unwrap();
    let report = service
        .build(&ModuleName::new("profile").unwrap(), "/project/")
        .unwrap();

    assert_eq!(report.modules_root, PathBuf::from("/project/modules"));
    let dirs = fs.snapshot();
    assert!(dirs.contains(Path::new("/project/modules/login")));
    assert!(dirs.contains(Path::new("/project/modules/profile")));
}

#[test]
fn test_resolver_examples() {
    assert_eq!(resolve_modules_root("/a/b/"), PathBuf::from("/a/b/modules"));
    assert_eq!(
        resolve_modules_root("/a/b/modules"),
        PathBuf::from("/a/b/modules")
    );
}
