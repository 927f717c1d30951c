//! Interactive project-name prompt.
//!
//! The prompt goes to stderr so stdout carries only the result line. With a
//! terminal on stdin (and the `interactive` feature) `dialoguer` handles line
//! editing; otherwise a single line is read from stdin, and EOF counts as an
//! empty answer.

use std::io::{self, BufRead, IsTerminal, Write};

use pyscaff_core::domain::ProjectName;

use crate::error::{CliResult, IntoCli};

/// Prompt text shown before reading the name.
pub const PROMPT: &str = "Enter project name";

/// Ask for a project name. An empty answer resolves to `default`.
pub fn project_name(default: &str) -> CliResult<ProjectName> {
    let answer = if io::stdin().is_terminal() {
        read_interactive()?
    } else {
        read_line(&mut io::stdin().lock(), &mut io::stderr())?
    };
    Ok(ProjectName::from_input(&answer, default))
}

#[cfg(feature = "interactive")]
fn read_interactive() -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt(PROMPT)
        .allow_empty(true)
        .interact_text()
        .map_err(io::Error::other)
        .with_cli_context(|| "Failed to read project name")
}

#[cfg(not(feature = "interactive"))]
fn read_interactive() -> CliResult<String> {
    read_line(&mut io::stdin().lock(), &mut io::stderr())
}

/// Write the prompt to `out` and read one line from `input`.
fn read_line(input: &mut impl BufRead, out: &mut impl Write) -> CliResult<String> {
    write!(out, "{PROMPT}: ")
        .and_then(|()| out.flush())
        .with_cli_context(|| "Failed to write prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_cli_context(|| "Failed to read project name")?;
    Ok(line)
}
