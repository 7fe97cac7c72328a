//! Markdown rendering for reflection documents
//!
//! The [`MarkdownRenderer`] serializes a single reflection subtree. The
//! [`GroupResolver`] turns a group's member ids into nodes, and the
//! [`OutputAssembler`] drives both to produce one markdown body per group.

mod assemble;
mod context;
mod error;
mod group;
mod markdown;

pub use assemble::{select_output, Emit, OutputAssembler, ParseEmitError, RenderedGroup};
pub use context::RenderContext;
pub use error::RenderError;
pub use group::{GroupResolver, UNTITLED_GROUP};
pub use markdown::{MarkdownRenderer, DEFAULT_MAX_DEPTH, NO_DESCRIPTION};
