pub mod blueprint;
pub mod common;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use blueprint::Blueprint;
pub use project_structure::ProjectStructure;
