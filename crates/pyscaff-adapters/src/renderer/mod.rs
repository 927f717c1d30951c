//! Renderer adapters.

mod simple;

pub use simple::SimpleRenderer;
