//! Resolving group member ids to reflections

use crate::reflection::{Group, NodeIndex, ReflectionNode};

/// Heading used for groups without a title
pub const UNTITLED_GROUP: &str = "Untitled Group";

/// Resolves a group's member ids through a [`NodeIndex`]
#[derive(Debug, Clone, Copy)]
pub struct GroupResolver<'a> {
    index: &'a NodeIndex<'a>,
    untitled_group: &'a str,
}

impl<'a> GroupResolver<'a> {
    /// Create a resolver using the default untitled-group heading
    pub fn new(index: &'a NodeIndex<'a>) -> Self {
        Self {
            index,
            untitled_group: UNTITLED_GROUP,
        }
    }

    /// Use a different heading for groups without a title
    pub fn with_untitled_group(mut self, untitled_group: &'a str) -> Self {
        self.untitled_group = untitled_group;
        self
    }

    /// Resolve member ids in order, skipping ids that are not in the index
    pub fn resolve_group(&self, group: &Group) -> Vec<&'a ReflectionNode> {
        group
            .member_ids
            .iter()
            .filter_map(|&id| {
                let node = self.index.lookup(id);
                if node.is_none() {
                    tracing::debug!(id, group = %group.title, "skipping unresolved group member");
                }
                node
            })
            .collect()
    }

    /// Title to show in the group heading
    pub fn heading_title<'g>(&self, group: &'g Group) -> &'g str
    where
        'a: 'g,
    {
        if group.title.is_empty() {
            self.untitled_group
        } else {
            &group.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::{Document, ReflectionKind};

    fn document() -> Document {
        Document::new(
            vec![
                ReflectionNode::new(1, ReflectionKind::Class).with_name("Alpha"),
                ReflectionNode::new(2, ReflectionKind::Interface)
                    .with_name("Beta")
                    .with_child(
                        ReflectionNode::new(3, ReflectionKind::Property).with_name("gamma"),
                    ),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_resolves_in_member_order() {
        let document = document();
        let index = NodeIndex::build(&document);
        let resolver = GroupResolver::new(&index);

        let resolved = resolver.resolve_group(&Group::new("Mixed", vec![3, 1, 2]));
        let names: Vec<_> = resolved
            .iter()
            .map(|n| n.name.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn test_unresolved_ids_are_skipped() {
        let document = document();
        let index = NodeIndex::build(&document);
        let resolver = GroupResolver::new(&index);

        let group = Group::new("Sparse", vec![99, 1, -4, 2, 100]);
        let resolved = resolver.resolve_group(&group);
        assert_eq!(resolved.len(), 2);
        assert!(resolved.len() <= group.member_ids.len());

        assert!(resolver.resolve_group(&Group::new("None", vec![7, 8])).is_empty());
    }

    #[test]
    fn test_heading_title() {
        let document = Document::default();
        let index = NodeIndex::build(&document);
        let resolver = GroupResolver::new(&index);

        assert_eq!(resolver.heading_title(&Group::new("Classes", vec![])), "Classes");
        assert_eq!(resolver.heading_title(&Group::default()), UNTITLED_GROUP);

        let custom = resolver.with_untitled_group("Other Exports");
        assert_eq!(custom.heading_title(&Group::default()), "Other Exports");
    }
}
