//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a module architecture".

pub mod architecture_service;

pub use architecture_service::{ArchitectureService, BuildReport};
