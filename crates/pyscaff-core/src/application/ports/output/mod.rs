//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pyscaff-adapters` crate provides implementations.

use crate::domain::{Blueprint, Permissions, ProjectStructure, RenderContext};
use crate::error::ScaffoldResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pyscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `pyscaff_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a single directory. The parent must already exist; an existing
    /// directory at `path` is not an error.
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()>;

    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Whether this filesystem has a POSIX-style permission model.
    fn supports_permissions(&self) -> bool;

    /// Apply permissions. Only called when [`Self::supports_permissions`]
    /// returns `true`.
    fn set_permissions(&self, path: &Path, permissions: Permissions) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for blueprint rendering.
///
/// Implemented by:
/// - `pyscaff_adapters::renderer::SimpleRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a blueprint into a project structure rooted at `output_root`.
    fn render(
        &self,
        blueprint: &Blueprint,
        context: &RenderContext,
        output_root: &Path,
    ) -> ScaffoldResult<ProjectStructure>;
}
