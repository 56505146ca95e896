use crate::domain::{entities::ModuleArchitecture, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_architecture(architecture: &ModuleArchitecture) -> Result<(), DomainError> {
        architecture.validate()
    }
}
