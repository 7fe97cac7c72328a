//! Id index over every reflection in a document

use std::collections::HashMap;

use super::types::{Document, ReflectionId, ReflectionNode};

/// Lookup table from reflection id to node, covering all depths
#[derive(Debug, Clone, Default)]
pub struct NodeIndex<'a> {
    nodes: HashMap<ReflectionId, &'a ReflectionNode>,
}

impl<'a> NodeIndex<'a> {
    /// Build the index by scanning the whole document once
    ///
    /// Nodes are visited in document pre-order. If an id occurs more than
    /// once, the first occurrence wins.
    pub fn build(document: &'a Document) -> Self {
        let mut nodes = HashMap::new();
        let mut pending: Vec<&'a ReflectionNode> = document.children.iter().rev().collect();

        while let Some(node) = pending.pop() {
            if nodes.contains_key(&node.id) {
                tracing::debug!(id = node.id, "duplicate reflection id, keeping first");
            } else {
                nodes.insert(node.id, node);
            }
            pending.extend(node.children.iter().rev());
        }

        tracing::debug!(nodes = nodes.len(), "built reflection index");
        Self { nodes }
    }

    /// Look up a reflection by id
    pub fn lookup(&self, id: ReflectionId) -> Option<&'a ReflectionNode> {
        self.nodes.get(&id).copied()
    }

    /// Check if a reflection with this id exists
    pub fn contains(&self, id: ReflectionId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of indexed reflections
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
