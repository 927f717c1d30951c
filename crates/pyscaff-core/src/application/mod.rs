//! Application layer for pyscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! blueprint rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{BlueprintEntry, EntryKind, ScaffoldRequest, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer};

pub use error::ApplicationError;
