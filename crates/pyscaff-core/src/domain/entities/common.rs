use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {:?}",
            path
        );
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Capability-based permissions model.
///
/// Adapters translate this into whatever the host supports; on POSIX hosts
/// [`Permissions::unix_mode`] gives the octal mode to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    readable: bool,
    writable: bool,
    executable: bool,
}

impl Permissions {
    pub const fn read_write() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: false,
        }
    }

    /// Owner rwx, group and other r-x.
    pub const fn executable() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: true,
        }
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }

    /// POSIX mode bits. Write is granted to the owner only.
    pub const fn unix_mode(&self) -> u32 {
        let mut mode = 0;
        if self.readable {
            mode |= 0o444;
        }
        if self.writable {
            mode |= 0o200;
        }
        if self.executable {
            mode |= 0o111;
        }
        mode
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executable_maps_to_rwxr_xr_x() {
        assert_eq!(Permissions::executable().unix_mode(), 0o755);
    }

    #[test]
    fn read_write_maps_to_rw_r_r() {
        assert_eq!(Permissions::read_write().unix_mode(), 0o644);
    }

    #[test]
    fn relative_path_rejects_absolute() {
        let absolute = std::env::temp_dir().join("x");
        assert!(matches!(
            RelativePath::try_new(absolute),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
        assert!(RelativePath::try_new("src/utils").is_ok());
    }
}
