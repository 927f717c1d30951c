//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use pyscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::Permissions,
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        trace!(path = %path.display(), "create_dir");
        match std::fs::create_dir(path) {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            result => result.map_err(|e| map_io_error(path, e, "create directory")),
        }
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn supports_permissions(&self) -> bool {
        cfg!(unix)
    }

    #[cfg(unix)]
    fn set_permissions(&self, path: &Path, permissions: Permissions) -> ScaffoldResult<()> {
        use std::os::unix::fs::PermissionsExt;

        let mode = permissions.unix_mode();
        trace!(path = %path.display(), mode = %format!("{mode:o}"), "set_permissions");
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
            .map_err(|e| map_io_error(path, e, "set permissions"))
    }

    #[cfg(not(unix))]
    fn set_permissions(&self, _path: &Path, _permissions: Permissions) -> ScaffoldResult<()> {
        // No POSIX mode bits here
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> ScaffoldError {
    ApplicationError::filesystem(path, operation, &e).into()
}
