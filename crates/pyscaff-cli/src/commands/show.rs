//! Implementation of the `pyscaff show` command.

use pyscaff_adapters::builtin_blueprint;
use pyscaff_core::{
    application::{BlueprintEntry, EntryKind, ScaffoldService},
    error::ScaffoldError,
};

use crate::{
    cli::{ShowArgs, ShowFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ShowArgs, output: OutputManager) -> CliResult<()> {
    let blueprint = builtin_blueprint::python_project().map_err(ScaffoldError::from)?;
    let entries = ScaffoldService::describe(&blueprint);

    match args.format {
        ShowFormat::Tree => {
            output.header(&format!("{} ({})", blueprint.name, blueprint.description))?;
            for line in tree_lines(&entries, &output) {
                output.print(&line)?;
            }
            output.print("")?;
            output.print(&format!(
                "{} directories, {} files",
                blueprint.directories.len(),
                blueprint.files.len()
            ))?;
        }

        // Machine-readable formats bypass quiet mode so pipes always get data.
        ShowFormat::List => {
            for entry in &entries {
                output.data(&entry.path)?;
            }
        }

        ShowFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(|e| CliError::IoError {
                message: format!("Failed to serialise blueprint: {e}"),
                source: e.into(),
            })?;
            output.data(&json)?;
        }
    }

    Ok(())
}

/// A path segment. Parents that only exist because something lives under
/// them have no entry of their own.
#[derive(Default)]
struct TreeNode<'a> {
    entry: Option<&'a BlueprintEntry>,
    children: Vec<(&'a str, TreeNode<'a>)>,
}

impl<'a> TreeNode<'a> {
    fn insert(&mut self, entry: &'a BlueprintEntry) {
        let mut node = self;
        for segment in entry.path.split('/') {
            let idx = match node.children.iter().position(|(name, _)| *name == segment) {
                Some(idx) => idx,
                None => {
                    node.children.push((segment, TreeNode::default()));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx].1;
        }
        node.entry = Some(entry);
    }

    fn render(&self, depth: usize, output: &OutputManager, lines: &mut Vec<String>) {
        for (name, child) in &self.children {
            lines.push(node_line(name, child.entry, depth, output));
            child.render(depth + 1, output, lines);
        }
    }
}

/// Entries grouped under their parent directories, children in blueprint order.
fn tree_lines(entries: &[BlueprintEntry], output: &OutputManager) -> Vec<String> {
    let mut root = TreeNode::default();
    for entry in entries {
        root.insert(entry);
    }

    let mut lines = Vec::new();
    root.render(1, output, &mut lines);
    lines
}

fn node_line(
    name: &str,
    entry: Option<&BlueprintEntry>,
    depth: usize,
    output: &OutputManager,
) -> String {
    let indent = "  ".repeat(depth);
    let Some(entry) = entry.filter(|e| e.kind == EntryKind::File) else {
        return format!("{indent}{name}/");
    };

    let mut notes = Vec::new();
    if entry.parameterized {
        notes.push("templated");
    }
    if entry.executable {
        notes.push("executable");
    }
    if notes.is_empty() {
        format!("{indent}{name}")
    } else {
        format!("{indent}{name} {}", output.dim(&format!("({})", notes.join(", "))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GlobalArgs;
    use crate::config::AppConfig;

    fn plain_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn entry(path: &str, kind: EntryKind, executable: bool, parameterized: bool) -> BlueprintEntry {
        BlueprintEntry {
            path: path.into(),
            kind,
            executable,
            parameterized,
        }
    }

    #[test]
    fn implied_parents_are_printed_once() {
        let entries = [
            entry("data/raw", EntryKind::Directory, false, false),
            entry("data/processed", EntryKind::Directory, false, false),
            entry(".gitignore", EntryKind::File, false, false),
            entry("data/.gitkeep", EntryKind::File, false, false),
        ];

        assert_eq!(
            tree_lines(&entries, &plain_output()),
            [
                "  data/",
                "    raw/",
                "    processed/",
                "    .gitkeep",
                "  .gitignore",
            ]
        );
    }

    #[test]
    fn file_annotations_are_listed() {
        let entries = [
            entry("scripts/setup_dev_env.sh", EntryKind::File, true, false),
            entry("docs/README.md", EntryKind::File, false, true),
        ];

        assert_eq!(
            tree_lines(&entries, &plain_output()),
            [
                "  scripts/",
                "    setup_dev_env.sh (executable)",
                "  docs/",
                "    README.md (templated)",
            ]
        );
    }

    #[test]
    fn builtin_tree_has_every_entry_under_a_parent() {
        let blueprint = builtin_blueprint::python_project().unwrap();
        let lines = tree_lines(&ScaffoldService::describe(&blueprint), &plain_output());

        assert!(lines.contains(&"  src/".to_string()));
        assert!(lines.contains(&"    modules/".to_string()));
        let data = lines.iter().position(|l| l == "  data/").unwrap();
        let gitkeep = lines.iter().position(|l| l == "    .gitkeep").unwrap();
        assert!(data < gitkeep);
    }
}
