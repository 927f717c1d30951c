//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Render the blueprint with the project context
//! 2. Create the root and every declared directory
//! 3. Write every file in order, applying permissions as it goes
//!
//! The run is single-pass and not transactional: the first filesystem error
//! aborts the sequence and whatever was already written stays on disk.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{
        Blueprint, DomainValidator as validator, FsEntry, Permissions, ProjectName,
        ProjectStructure, RenderContext,
    },
    error::{ScaffoldError, ScaffoldResult},
};

/// Everything a single scaffold run needs from its caller.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub project_name: ProjectName,
    /// Directory the project root is created in.
    pub base_dir: PathBuf,
    /// Substituted for `{{DATE}}` / `{{YEAR}}`.
    pub date: NaiveDate,
}

impl ScaffoldRequest {
    pub fn new(project_name: ProjectName, base_dir: impl Into<PathBuf>, date: NaiveDate) -> Self {
        Self {
            project_name,
            base_dir: base_dir.into(),
            date,
        }
    }

    /// `base_dir / project_name`.
    pub fn root(&self) -> PathBuf {
        self.base_dir.join(self.project_name.as_str())
    }
}

/// One blueprint entry, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintEntry {
    pub path: String,
    pub kind: EntryKind,
    pub executable: bool,
    pub parameterized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Generate the project described by `blueprint`.
    ///
    /// Existing directories are reused and existing files are overwritten.
    /// Returns the first filesystem error encountered; nothing is cleaned up.
    #[instrument(
        skip_all,
        fields(
            blueprint = %blueprint.name,
            project = %request.project_name,
            base_dir = %request.base_dir.display()
        )
    )]
    pub fn scaffold(&self, blueprint: &Blueprint, request: &ScaffoldRequest) -> ScaffoldResult<()> {
        info!("Scaffolding project");

        let structure = self.plan(blueprint, request)?;
        debug!(entries = structure.entry_count(), "Blueprint rendered");

        self.write_structure(&structure)?;

        info!(root = %structure.root().display(), "Scaffold completed successfully");
        Ok(())
    }

    /// Render without writing anything. Used for dry runs.
    pub fn plan(
        &self,
        blueprint: &Blueprint,
        request: &ScaffoldRequest,
    ) -> ScaffoldResult<ProjectStructure> {
        validator::validate_blueprint(blueprint).map_err(ScaffoldError::Domain)?;

        let context = RenderContext::new(request.project_name.clone(), request.date);
        self.renderer.render(blueprint, &context, &request.root())
    }

    /// Whether the project root already exists (files would be overwritten).
    pub fn root_exists(&self, request: &ScaffoldRequest) -> bool {
        self.filesystem.exists(&request.root())
    }

    /// Flatten a blueprint into display entries, directories first.
    pub fn describe(blueprint: &Blueprint) -> Vec<BlueprintEntry> {
        let dirs = blueprint.directories.iter().map(|d| BlueprintEntry {
            path: d.path.to_string(),
            kind: EntryKind::Directory,
            executable: false,
            parameterized: false,
        });
        let files = blueprint.files.iter().map(|f| BlueprintEntry {
            path: f.path.to_string(),
            kind: EntryKind::File,
            executable: f.permissions.executable_flag(),
            parameterized: f.content.is_parameterized(),
        });
        dirs.chain(files).collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write all entries in order, stopping at the first failure.
    ///
    /// Only the root's own directory is created; a missing base directory is
    /// reported, not created.
    fn write_structure(&self, structure: &ProjectStructure) -> ScaffoldResult<()> {
        let root = structure.root();
        self.filesystem.create_dir(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.apply_permissions(&path, file.permissions)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn apply_permissions(&self, path: &Path, permissions: Permissions) -> ScaffoldResult<()> {
        if self.filesystem.supports_permissions() {
            self.filesystem.set_permissions(path, permissions)
        } else {
            debug!(path = %path.display(), "Permission model unsupported, skipping");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockFilesystem, MockTemplateRenderer};
    use crate::domain::{DirectorySpec, FileSpec};
    use std::io::ErrorKind;
    use std::sync::{Arc, Mutex};

    fn blueprint() -> Blueprint {
        Blueprint::builder()
            .name("test")
            .directory(DirectorySpec::new("src"))
            .file(FileSpec::parameterized("README.md", "# {{PROJECT_NAME}}\n"))
            .file(FileSpec::literal("run.sh", "#!/bin/sh\n").executable())
            .build()
            .unwrap()
    }

    fn request() -> ScaffoldRequest {
        ScaffoldRequest::new(
            ProjectName::new("demo"),
            "base",
            NaiveDate::from_ymd_opt(2025, 8, 8).unwrap(),
        )
    }

    fn rendered() -> ProjectStructure {
        ProjectStructure::new("base/demo")
            .with_directory("src")
            .with_file("README.md", "# demo\n".into(), Permissions::read_write())
            .with_file("run.sh", "#!/bin/sh\n".into(), Permissions::executable())
    }

    fn renderer_returning(structure: ProjectStructure) -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(move |_, _, _| Ok(structure.clone()));
        renderer
    }

    fn denied(path: &Path) -> ScaffoldError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            operation: "create directory",
            kind: ErrorKind::PermissionDenied,
            reason: "permission denied".into(),
        }
        .into()
    }

    #[test]
    fn request_root_joins_base_and_name() {
        assert_eq!(request().root(), PathBuf::from("base").join("demo"));
    }

    #[test]
    fn writes_in_blueprint_order() {
        let calls = Arc::new(Mutex::new(Vec::<String>::new()));
        let mut fs = MockFilesystem::new();

        let log = Arc::clone(&calls);
        fs.expect_create_dir().times(1).returning(move |p| {
            log.lock().unwrap().push(format!("mkdir-root {}", p.display()));
            Ok(())
        });
        let log = Arc::clone(&calls);
        fs.expect_create_dir_all().returning(move |p| {
            log.lock().unwrap().push(format!("mkdir {}", p.display()));
            Ok(())
        });
        let log = Arc::clone(&calls);
        fs.expect_write_file().returning(move |p, c| {
            log.lock().unwrap().push(format!("write {} {:?}", p.display(), c));
            Ok(())
        });
        fs.expect_supports_permissions().return_const(true);
        let log = Arc::clone(&calls);
        fs.expect_set_permissions().returning(move |p, perms| {
            log.lock()
                .unwrap()
                .push(format!("chmod {} {:o}", p.display(), perms.unix_mode()));
            Ok(())
        });

        let service = ScaffoldService::new(Box::new(renderer_returning(rendered())), Box::new(fs));
        service.scaffold(&blueprint(), &request()).unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            [
                "mkdir-root base/demo",
                "mkdir base/demo/src",
                "mkdir base/demo",
                "write base/demo/README.md \"# demo\\n\"",
                "mkdir base/demo",
                "write base/demo/run.sh \"#!/bin/sh\\n\"",
                "chmod base/demo/run.sh 755",
            ]
        );
    }

    #[test]
    fn skips_permissions_without_permission_model() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_supports_permissions().return_const(false);
        fs.expect_set_permissions().never();

        let service = ScaffoldService::new(Box::new(renderer_returning(rendered())), Box::new(fs));
        assert!(service.scaffold(&blueprint(), &request()).is_ok());
    }

    #[test]
    fn root_failure_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir()
            .times(1)
            .returning(|p| Err(denied(p)));
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(renderer_returning(rendered())), Box::new(fs));
        let err = service.scaffold(&blueprint(), &request()).unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::FilesystemError {
                kind: ErrorKind::PermissionDenied,
                ..
            })
        ));
    }

    #[test]
    fn write_failure_stops_the_sequence() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .times(1)
            .returning(|p, _| Err(denied(p)));
        fs.expect_set_permissions().never();

        let service = ScaffoldService::new(Box::new(renderer_returning(rendered())), Box::new(fs));
        assert!(service.scaffold(&blueprint(), &request()).is_err());
    }

    #[test]
    fn renderer_receives_project_context_and_root() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|_, ctx, root| {
                ctx.get("PROJECT_NAME") == Some("demo")
                    && ctx.get("DATE") == Some("2025-08-08")
                    && root == Path::new("base/demo")
            })
            .times(1)
            .returning(|_, _, _| Ok(rendered()));

        let service = ScaffoldService::new(Box::new(renderer), Box::new(MockFilesystem::new()));
        let plan = service.plan(&blueprint(), &request()).unwrap();
        assert_eq!(plan.entry_count(), 3);
    }

    #[test]
    fn invalid_blueprint_is_rejected_before_rendering() {
        let broken = Blueprint {
            name: "broken".into(),
            description: String::new(),
            directories: vec![],
            files: vec![],
        };
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let service = ScaffoldService::new(Box::new(renderer), Box::new(MockFilesystem::new()));
        assert!(matches!(
            service.plan(&broken, &request()),
            Err(ScaffoldError::Domain(_))
        ));
    }

    #[test]
    fn root_exists_asks_the_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("base/demo"))
            .return_const(true);

        let service = ScaffoldService::new(Box::new(MockTemplateRenderer::new()), Box::new(fs));
        assert!(service.root_exists(&request()));
    }

    #[test]
    fn describe_lists_directories_then_files() {
        let entries = ScaffoldService::describe(&blueprint());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert!(entries[1].parameterized);
        assert!(entries[2].executable);
    }
}
