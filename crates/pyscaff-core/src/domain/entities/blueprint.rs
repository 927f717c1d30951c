//! Blueprint: the declarative table a project skeleton is generated from.
//!
//! A [`Blueprint`] is pure data: an ordered list of directories followed by
//! an ordered list of files. It never touches the filesystem. Rendering it
//! against a [`RenderContext`] yields a
//! [`ProjectStructure`](super::ProjectStructure) that the application layer
//! writes out.

use std::borrow::Cow;
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    error::DomainError,
    value_objects::ProjectName,
};

// ============================================================================
// Render Context
// ============================================================================

/// Variables available to parameterized content.
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "demo" | User input, verbatim |
/// | `DATE` | "2025-08-08" | Caller supplied |
/// | `YEAR` | "2025" | Derived from `DATE` |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: Vec<(String, String)>,
}

impl RenderContext {
    pub fn new(project_name: ProjectName, date: NaiveDate) -> Self {
        let variables = vec![
            ("PROJECT_NAME".to_string(), project_name.as_str().to_string()),
            ("DATE".to_string(), date.format("%Y-%m-%d").to_string()),
            ("YEAR".to_string(), date.format("%Y").to_string()),
        ];

        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace `{{VARIABLE}}` placeholders in a single left-to-right scan.
    ///
    /// Substituted values are never rescanned, so a project name that itself
    /// looks like a placeholder is written out verbatim. Unknown placeholders
    /// are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

// ============================================================================
// Blueprint
// ============================================================================

/// An ordered, declarative project skeleton.
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub name: String,
    pub description: String,
    pub directories: Vec<DirectorySpec>,
    pub files: Vec<FileSpec>,
}

impl Blueprint {
    pub fn builder() -> BlueprintBuilder {
        BlueprintBuilder::default()
    }

    /// Check the table invariants: non-empty, relative, unique paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::EmptyBlueprint {
                name: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        let paths = self
            .directories
            .iter()
            .map(|d| &d.path)
            .chain(self.files.iter().map(|f| &f.path));

        for path in paths {
            if path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len() + self.files.len()
    }
}

/// Builder for [`Blueprint`]. Entries keep insertion order.
#[derive(Debug, Default)]
pub struct BlueprintBuilder {
    name: Option<String>,
    description: String,
    directories: Vec<DirectorySpec>,
    files: Vec<FileSpec>,
}

impl BlueprintBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn directory(mut self, spec: DirectorySpec) -> Self {
        self.directories.push(spec);
        self
    }

    pub fn file(mut self, spec: FileSpec) -> Self {
        self.files.push(spec);
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<Blueprint, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;

        let blueprint = Blueprint {
            name,
            description: self.description,
            directories: self.directories,
            files: self.files,
        };
        blueprint.validate()?;
        Ok(blueprint)
    }
}

// ============================================================================
// Entries
// ============================================================================

/// A directory to create (parents included).
#[derive(Debug, Clone)]
pub struct DirectorySpec {
    pub path: RelativePath,
}

impl DirectorySpec {
    pub fn new(path: impl Into<RelativePath>) -> Self {
        Self { path: path.into() }
    }
}

/// A file to write. Defaults to read-write; use [`FileSpec::executable`]
/// for scripts.
#[derive(Debug, Clone)]
pub struct FileSpec {
    pub path: RelativePath,
    pub content: TemplateContent,
    pub permissions: Permissions,
}

impl FileSpec {
    pub fn new(path: impl Into<RelativePath>, content: TemplateContent) -> Self {
        Self {
            path: path.into(),
            content,
            permissions: Permissions::read_write(),
        }
    }

    /// File copied as-is.
    pub fn literal(path: impl Into<RelativePath>, content: impl Into<Cow<'static, str>>) -> Self {
        Self::new(path, TemplateContent::Literal(content.into()))
    }

    /// File whose `{{VARIABLE}}` placeholders are substituted.
    pub fn parameterized(
        path: impl Into<RelativePath>,
        content: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(path, TemplateContent::Parameterized(content.into()))
    }

    pub fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }
}

/// Content specification for a file.
#[derive(Debug, Clone)]
pub enum TemplateContent {
    /// Content used exactly as provided.
    Literal(Cow<'static, str>),

    /// Content with `{{VARIABLE}}` placeholders to be substituted.
    Parameterized(Cow<'static, str>),
}

impl TemplateContent {
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(source) => source.to_string(),
            Self::Parameterized(source) => ctx.render(source),
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized(_))
    }
}
