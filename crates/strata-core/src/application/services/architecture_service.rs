//! Architecture Service - main application orchestrator.
//!
//! This service coordinates the module generation workflow:
//! 1. Resolve the `modules` root for the target directory
//! 2. Plan the module skeleton
//! 3. Create every planned directory, in order
//!
//! It implements the driving port (incoming) and uses the `Filesystem`
//! driven port (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        DirectoryRole, DomainValidator as validator, ModuleArchitecture, ModuleName,
    },
    error::{StrataError, StrataResult},
};

/// Outcome of a successful [`ArchitectureService::build`].
///
/// `created` and `existing` are advisory. Each request is classified by an
/// `is_dir` check made just before `create_dir_all`, so a directory created
/// by a concurrent build between the two calls is counted as `created` by
/// both runs. The directories on disk are correct either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub module: ModuleName,
    pub modules_root: PathBuf,
    pub module_root: PathBuf,
    /// Directories that did not exist before this build.
    pub created: usize,
    /// Directories that were already present.
    pub existing: usize,
}

/// Module generation service.
///
/// Stateless apart from its filesystem adapter; every call is independent.
pub struct ArchitectureService {
    filesystem: Box<dyn Filesystem>,
}

impl ArchitectureService {
    /// Create a new architecture service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use strata_core::application::ArchitectureService;
    ///
    /// let service = ArchitectureService::new(filesystem); // impl Filesystem
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Compute the directories `build` would create, without touching the
    /// filesystem.
    pub fn plan(
        &self,
        name: &ModuleName,
        target_directory: impl AsRef<Path>,
    ) -> StrataResult<ModuleArchitecture> {
        let architecture = ModuleArchitecture::plan(name, target_directory);
        validator::validate_architecture(&architecture).map_err(StrataError::Domain)?;
        Ok(architecture)
    }

    /// Generate the module skeleton for `name` under `target_directory`.
    ///
    /// The first failing directory request aborts the build and its error is
    /// returned unchanged. Directories created before the failure are left
    /// in place.
    #[instrument(
        skip_all,
        fields(
            module = %name,
            target_dir = %target_directory.as_ref().display()
        )
    )]
    pub fn build(
        &self,
        name: &ModuleName,
        target_directory: impl AsRef<Path>,
    ) -> StrataResult<BuildReport> {
        info!("Generating module architecture");

        let architecture = self.plan(name, target_directory)?;
        debug!(
            modules_root = %architecture.modules_root().display(),
            requests = architecture.request_count(),
            "Module planned"
        );

        let mut created = 0;
        let mut existing = 0;

        for request in architecture.requests() {
            let already_present = self.filesystem.is_dir(&request.path);

            if already_present && request.role == DirectoryRole::ModulesRoot {
                debug!(path = %request.path.display(), "Modules root already exists");
                existing += 1;
                continue;
            }

            self.filesystem
                .create_dir_all(&request.path)
                .inspect_err(|e| {
                    warn!(
                        error = %e,
                        path = %request.path.display(),
                        role = %request.role,
                        "Directory creation failed"
                    )
                })?;

            if already_present {
                existing += 1;
            } else {
                created += 1;
            }
        }

        info!(created, existing, "Module architecture generated");

        Ok(BuildReport {
            module: name.clone(),
            modules_root: architecture.modules_root().to_path_buf(),
            module_root: architecture.module_root().to_path_buf(),
            created,
            existing,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    fn login() -> ModuleName {
        ModuleName::new("Login").unwrap()
    }

    /// Mock that records every `create_dir_all` call and fails on paths for
    /// which `fail` returns true.
    fn recording_mock(
        fail: impl Fn(&Path) -> bool + Send + 'static,
    ) -> (MockFilesystem, Arc<Mutex<Vec<PathBuf>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&calls);

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);
        fs.expect_create_dir_all().returning(move |path| {
            recorded.lock().unwrap().push(path.to_path_buf());
            if fail(path) {
                Err(ApplicationError::DirectoryCreation {
                    path: path.to_path_buf(),
                    reason: "Permission denied (os error 13)".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        (fs, calls)
    }

    #[test]
    fn build_requests_every_directory_in_order() {
        let (fs, calls) = recording_mock(|_| false);
        let service = ArchitectureService::new(Box::new(fs));

        let report = service.build(&login(), "/project").unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 14);
        assert_eq!(calls[0], PathBuf::from("/project/modules"));
        assert_eq!(calls[1], PathBuf::from("/project/modules/Login"));
        assert_eq!(
            calls[2],
            PathBuf::from("/project/modules/Login/infrastructure")
        );
        assert_eq!(
            calls[13],
            PathBuf::from("/project/modules/Login/presentation/widgets")
        );
        assert_eq!(report.created, 14);
        assert_eq!(report.existing, 0);
        assert_eq!(report.module_root, PathBuf::from("/project/modules/Login"));
    }

    #[test]
    fn existing_modules_root_is_not_recreated() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p| p.as_os_str() == "/project/modules");
        fs.expect_create_dir_all()
            .withf(|p| p.as_os_str() == "/project/modules")
            .never();
        fs.expect_create_dir_all().times(13).returning(|_| Ok(()));

        let service = ArchitectureService::new(Box::new(fs));
        let report = service.build(&login(), "/project").unwrap();

        assert_eq!(report.created, 13);
        assert_eq!(report.existing, 1);
        assert_eq!(report.created + report.existing, 14);
    }

    #[test]
    fn failure_on_domain_layer_propagates_unchanged() {
        let (fs, calls) = recording_mock(|p| p.ends_with("Login/domain"));
        let service = ArchitectureService::new(Box::new(fs));

        let err = service.build(&login(), "/project").unwrap_err();

        assert_eq!(
            err,
            StrataError::Application(ApplicationError::DirectoryCreation {
                path: PathBuf::from("/project/modules/Login/domain"),
                reason: "Permission denied (os error 13)".into(),
            })
        );

        // Infrastructure was fully requested; nothing after the failure was.
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 7);
        assert!(
            calls
                .iter()
                .all(|p| !p.starts_with("/project/modules/Login/presentation"))
        );
    }

    #[test]
    fn failure_on_a_child_directory_propagates() {
        let (fs, _) = recording_mock(|p| p.ends_with("presentation/widgets"));
        let service = ArchitectureService::new(Box::new(fs));

        let err = service.build(&login(), "/project").unwrap_err();
        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::DirectoryCreation { .. })
        ));
    }

    #[test]
    fn build_inside_modules_directory_does_not_nest() {
        let (fs, calls) = recording_mock(|_| false);
        let service = ArchitectureService::new(Box::new(fs));

        service.build(&login(), "/project/modules").unwrap();

        let calls = calls.lock().unwrap();
        assert!(
            calls
                .iter()
                .all(|p| !p.starts_with("/project/modules/modules"))
        );
        assert_eq!(calls[1], PathBuf::from("/project/modules/Login"));
    }

    #[test]
    fn plan_does_not_touch_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_is_dir().never();

        let service = ArchitectureService::new(Box::new(fs));
        let plan = service.plan(&login(), "/project").unwrap();
        assert_eq!(plan.request_count(), 14);
    }

    #[test]
    fn counts_follow_the_is_dir_answer_at_request_time() {
        // Counts come from the `is_dir` answer seen just before each create.
        let seen = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&seen);

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(move |p| {
            p.as_os_str() == "/project/modules/Login" && *flag.lock().unwrap()
        });
        let toggle = Arc::clone(&seen);
        fs.expect_create_dir_all().returning(move |p| {
            if p.as_os_str() == "/project/modules/Login" {
                *toggle.lock().unwrap() = true;
            }
            Ok(())
        });

        let service = ArchitectureService::new(Box::new(fs));
        let first = service.build(&login(), "/project").unwrap();
        assert_eq!((first.created, first.existing), (14, 0));

        let second = service.build(&login(), "/project").unwrap();
        assert_eq!((second.created, second.existing), (13, 1));
    }
}
