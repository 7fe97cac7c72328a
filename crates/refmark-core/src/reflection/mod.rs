//! Reflection trees emitted by TypeDoc
//!
//! This module holds the in-memory document model, the JSON loader that
//! builds it, and the id index used to resolve group members.

mod index;
mod kind;
mod load;
mod types;

pub use index::NodeIndex;
pub use kind::ReflectionKind;
pub use load::DocumentError;
pub use types::{Comment, Document, Group, ReflectionId, ReflectionNode};
