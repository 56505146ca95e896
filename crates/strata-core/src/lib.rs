//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strata
//! module scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! Given a target directory and a module name, Strata resolves the
//! `modules` root and creates a fixed three-layer skeleton:
//!
//! ```text
//! modules/<Name>/infrastructure/{datasources,models,repositories}/
//! modules/<Name>/domain/{entities,repositories,usecases}/
//! modules/<Name>/presentation/{controllers,pages,widgets}/
//! ```
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │         (ArchitectureService)           │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    strata-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ModuleName, LAYERS, ModuleArchitecture)│
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strata_core::{application::ArchitectureService, domain::ModuleName};
//!
//! // 1. Validate the name
//! let name = ModuleName::new("login").unwrap();
//!
//! // 2. Use application service (with injected adapter)
//! let service = ArchitectureService::new(filesystem);
//! service.build(&name, "/path/to/project").unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ArchitectureService, BuildReport, ports::Filesystem};
    pub use crate::domain::{
        DirectoryRequest, DirectoryRole, LAYERS, Layer, LayerSpec, ModuleArchitecture,
        ModuleName, resolve_modules_root,
    };
    pub use crate::error::{StrataError, StrataResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
