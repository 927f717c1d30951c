//! pyscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pyscaff
//! Python project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pyscaff-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Renderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pyscaff-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SimpleRenderer, etc.) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Data)        │
//! │  (Blueprint, ProjectName, Structure)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pyscaff_core::prelude::*;
//!
//! let service = ScaffoldService::new(renderer, filesystem);
//! let request = ScaffoldRequest::new(ProjectName::new("demo"), ".", today);
//! service.scaffold(&blueprint, &request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldRequest, ScaffoldService,
        ports::{Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        Blueprint, DirectorySpec, FileSpec, Permissions, ProjectName, ProjectStructure,
        RenderContext,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}
