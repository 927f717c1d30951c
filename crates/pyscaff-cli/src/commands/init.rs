//! `pyscaff init`: create a default configuration file.

use std::path::Path;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Starter file written by `init`. Every key is present but commented out so
/// the built-in defaults stay in effect until edited.
const TEMPLATE: &str = "\
# pyscaff configuration

[defaults]
# Name used when the prompt answer is empty.
# project_name = \"my_project\"
# Directory new projects are created in when --path is absent.
# base_dir = \".\"

[output]
no_color = false
";

/// Create a default pyscaff configuration file at the active config path.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::active_path(global.config.as_deref());
    output.info(&format!("Initialising configuration at {}", config_path.display()))?;

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_template(&config_path)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn write_template(path: &Path) -> CliResult<()> {
    // The template must stay loadable.
    toml::from_str::<AppConfig>(TEMPLATE).map_err(|e| CliError::ConfigError {
        message: format!("Built-in config template is invalid: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }

    std::fs::write(path, TEMPLATE)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
