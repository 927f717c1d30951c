use std::fmt;

use serde::{Deserialize, Serialize};

/// Name used when the user gives none.
pub const DEFAULT_PROJECT_NAME: &str = "my_project";

/// Name of the project being generated.
///
/// Used verbatim as the root directory name and inside templates. No
/// character or collision checks are applied: whatever the user typed is
/// what ends up on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Wrap a name as-is. An empty string falls back to
    /// [`DEFAULT_PROJECT_NAME`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            Self::default()
        } else {
            Self(name)
        }
    }

    /// Resolve a name read from an interactive prompt.
    ///
    /// Only the line terminator is stripped; empty input yields `default`.
    pub fn from_input(input: &str, default: &str) -> Self {
        let line = input.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            Self::new(default)
        } else {
            Self(line.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_NAME.to_string())
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
