//! Implementation of the `refmark groups` command.

use anyhow::Result;
use std::fmt;
use std::path::Path;

use refmark_core::{Config, GroupResolver, NodeIndex};

use crate::render::read_document;

/// A group heading with its resolved and declared member counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    /// Heading the group renders under.
    pub heading: String,
    /// Members found in the document.
    pub resolved: usize,
    /// Members the group declares.
    pub declared: usize,
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {} members)",
            self.heading, self.resolved, self.declared
        )
    }
}

/// Summarize every group declared in a document.
pub fn list_groups(input: &Path, config: &Config) -> Result<Vec<GroupSummary>> {
    let document = read_document(input)?;
    let index = NodeIndex::build(&document);
    let resolver = GroupResolver::new(&index).with_untitled_group(&config.render.untitled_group);

    Ok(document
        .groups
        .iter()
        .map(|group| GroupSummary {
            heading: resolver.heading_title(group).to_string(),
            resolved: resolver.resolve_group(group).len(),
            declared: group.member_ids.len(),
        })
        .collect())
}
