// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! This module contains pure business logic with ZERO I/O.
//! Directory creation is handled via the `Filesystem` port defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Path resolution and planning are string/path arithmetic
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: A plan is computed once and never mutated
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod layout;
pub mod modules_root;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::module_architecture::{DirectoryRequest, DirectoryRole, ModuleArchitecture};

pub use error::{DomainError, ErrorCategory};

pub use layout::{LAYERS, LayerSpec, MODULES_DIR, spec_for};
pub use modules_root::resolve_modules_root;
pub use value_objects::{Layer, ModuleName};

pub use validation::DomainValidator;
