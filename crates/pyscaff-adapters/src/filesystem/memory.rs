//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use pyscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::Permissions,
    error::{ScaffoldError, ScaffoldResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can hand one clone to the service
/// and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    modes: HashMap<PathBuf, u32>,
    denied: HashSet<PathBuf>,
    supports_permissions: bool,
    write_count: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem with a POSIX-like permission model.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner {
                files: HashMap::new(),
                directories: HashSet::new(),
                modes: HashMap::new(),
                denied: HashSet::new(),
                supports_permissions: true,
                write_count: 0,
            })),
        }
    }

    /// A filesystem that reports no permission model (like Windows).
    pub fn without_permissions() -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            inner.supports_permissions = false;
        }
        fs
    }

    /// Make every operation at or below `path` fail with permission denied.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Mode applied through `set_permissions`, if any.
    pub fn mode(&self, path: &Path) -> Option<u32> {
        let inner = self.inner.read().ok()?;
        inner.modes.get(path).copied()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// Total number of `write_file` calls that succeeded.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.write_count).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn check_allowed(&self, path: &Path, operation: &'static str) -> ScaffoldResult<()> {
        if self.denied.iter().any(|d| path.starts_with(d)) {
            let err = io::Error::from(io::ErrorKind::PermissionDenied);
            return Err(ApplicationError::filesystem(path, operation, &err).into());
        }
        Ok(())
    }
}

fn poisoned() -> ScaffoldError {
    ScaffoldError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.check_allowed(path, "create directory")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                let err = io::Error::from(io::ErrorKind::NotFound);
                return Err(ApplicationError::filesystem(path, "create directory", &err).into());
            }
        }
        if inner.files.contains_key(path) {
            let err = io::Error::from(io::ErrorKind::AlreadyExists);
            return Err(ApplicationError::filesystem(path, "create directory", &err).into());
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.check_allowed(path, "create directory")?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.check_allowed(path, "write file")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                let err = io::Error::from(io::ErrorKind::NotFound);
                return Err(ApplicationError::filesystem(path, "write file", &err).into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.write_count += 1;
        Ok(())
    }

    fn supports_permissions(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.supports_permissions)
            .unwrap_or(false)
    }

    fn set_permissions(&self, path: &Path, permissions: Permissions) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.check_allowed(path, "set permissions")?;

        if !inner.files.contains_key(path) {
            let err = io::Error::from(io::ErrorKind::NotFound);
            return Err(ApplicationError::filesystem(path, "set permissions", &err).into());
        }

        inner.modes.insert(path.to_path_buf(), permissions.unix_mode());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
