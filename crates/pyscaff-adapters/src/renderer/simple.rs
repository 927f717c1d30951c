//! Simple variable substitution renderer.

use std::path::Path;

use pyscaff_core::{
    application::ports::TemplateRenderer,
    domain::{Blueprint, DomainValidator as validator, ProjectStructure, RenderContext},
    error::{ScaffoldError, ScaffoldResult},
};
use tracing::{instrument, trace};

/// Renderer using `{{VARIABLE}}` substitution only.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(blueprint = %blueprint.name))]
    fn render(
        &self,
        blueprint: &Blueprint,
        context: &RenderContext,
        output_root: &Path,
    ) -> ScaffoldResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(output_root);

        for spec in &blueprint.directories {
            structure.add_directory(spec.path.as_path());
        }

        for spec in &blueprint.files {
            let content = spec.content.render(context);
            trace!(path = %spec.path, bytes = content.len(), "rendered file");
            structure.add_file(spec.path.as_path(), content, spec.permissions);
        }

        validator::validate_project_structure(&structure).map_err(ScaffoldError::Domain)?;

        Ok(structure)
    }
}
