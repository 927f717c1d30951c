//! Application ports (traits) for external dependencies.
//!
//! Ports define interfaces that the application needs from the outside
//! world. Adapters in `pyscaff-adapters` implement these.
//!
//! - `Filesystem`: directory/file creation and permissions
//! - `TemplateRenderer`: turning a blueprint into concrete content

pub mod output;

pub use output::{Filesystem, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer};
