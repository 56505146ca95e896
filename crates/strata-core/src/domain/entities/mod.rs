pub mod module_architecture;

pub use crate::domain::DomainError;
pub use module_architecture::{DirectoryRequest, DirectoryRole, ModuleArchitecture};
