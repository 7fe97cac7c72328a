//! Refmark Core - Markdown rendering for TypeDoc reflection trees
//!
//! This crate provides the core functionality:
//! - Reflection: the documentation tree model, JSON loading and the id index
//! - Render: the depth-aware markdown engine, group resolution and assembly
//! - Config: `refmark.toml` render settings

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reflection model - nodes, groups and documents produced by TypeDoc
pub mod reflection;

/// Rendering module - converts reflections into markdown
pub mod render;

/// Render configuration loaded from `refmark.toml`
pub mod config;

pub use config::{Config, ConfigError, RenderConfig, CONFIG_FILE};
pub use reflection::{
    Comment, Document, DocumentError, Group, NodeIndex, ReflectionId, ReflectionKind,
    ReflectionNode,
};
pub use render::{
    select_output, Emit, GroupResolver, MarkdownRenderer, OutputAssembler, RenderContext,
    RenderError, RenderedGroup,
};
