//! Infrastructure adapters for pyscaff.
//!
//! This crate implements the ports defined in `pyscaff-core::application::ports`
//! and ships the built-in blueprint. It contains all I/O operations.

pub mod builtin_blueprint;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
