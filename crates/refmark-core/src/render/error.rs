//! Rendering errors

use thiserror::Error;

use crate::reflection::ReflectionId;

/// Errors that can occur while rendering a reflection tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("reflection #{id} would render at depth {depth}, exceeding the limit of {limit}")]
    DepthExceeded {
        id: ReflectionId,
        depth: usize,
        limit: usize,
    },
}
