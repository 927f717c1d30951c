// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for pyscaff.
//!
//! This module contains pure data and rules with no I/O. Writing to disk is
//! handled via ports (traits) defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Declarative**: the project skeleton is a [`Blueprint`] table, not code
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    blueprint::{
        Blueprint, BlueprintBuilder, DirectorySpec, FileSpec, RenderContext, TemplateContent,
    },
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{DEFAULT_PROJECT_NAME, ProjectName};

pub use entities::common::{Permissions, RelativePath};
pub use validation::DomainValidator;
