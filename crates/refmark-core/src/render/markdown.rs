//! Markdown serializer for reflection trees

use std::borrow::Cow;

use super::context::RenderContext;
use super::error::RenderError;
use crate::reflection::{ReflectionKind, ReflectionNode};

/// Description used when a reflection has no summary
pub const NO_DESCRIPTION: &str = "No description";

/// Default limit on heading depth before rendering fails
pub const DEFAULT_MAX_DEPTH: usize = 64;

const TABLE_HEAD: &str = "<table>\n<thead><th>Name</th><th>Description</th></thead>\n<tbody>\n";
const TABLE_TAIL: &str = "</tbody>\n</table>";

/// Renders reflections as markdown, one kind-specific serializer per kind
///
/// Every call to [`MarkdownRenderer::render`] first derives a child context
/// one level deeper than the one it was given. The node's own heading uses
/// that depth and its children are rendered with that same context, so each
/// level of the tree gets one more `#` than its parent.
///
/// Example output for a class with one documented method:
/// ```text
/// ## Calculator
///
/// <details>
/// <summary>Class</summary>
///
/// No description
///
/// ### add
///
/// _Method_
///
/// Adds two numbers
///
/// </details>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownRenderer {
    max_depth: usize,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with the default depth limit
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a renderer that fails once headings would exceed `max_depth`
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The configured depth limit
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Render a reflection and its descendants
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DepthExceeded`] if any heading in the subtree
    /// would be deeper than the configured limit.
    pub fn render(
        &self,
        node: &ReflectionNode,
        context: RenderContext,
    ) -> Result<String, RenderError> {
        let inner = context.child();
        // Table rows carry no heading, so only headed output is bounded
        let headed = !(context.table_row() && node.kind.is_property());
        if headed && inner.depth() > self.max_depth {
            return Err(RenderError::DepthExceeded {
                id: node.id,
                depth: inner.depth(),
                limit: self.max_depth,
            });
        }

        match &node.kind {
            ReflectionKind::Method | ReflectionKind::Constructor => self.render_member(node, inner),
            ReflectionKind::Class => self.render_class(node, inner),
            ReflectionKind::Interface => self.render_interface(node, inner),
            ReflectionKind::Property => Ok(Self::render_property(node, context.table_row(), inner)),
            ReflectionKind::Other(_) => self.render_member(node, inner),
        }
    }

    /// Heading, kind label, description, then children
    fn render_member(
        &self,
        node: &ReflectionNode,
        context: RenderContext,
    ) -> Result<String, RenderError> {
        let children = self.render_children(&node.children, context)?;
        Ok(blocks([
            Self::heading(node, context).as_str(),
            format!("_{}_", node.kind).as_str(),
            node.summary().unwrap_or(NO_DESCRIPTION),
            children.as_str(),
        ]))
    }

    /// Heading followed by a collapsible block labelled with the kind
    fn render_class(
        &self,
        node: &ReflectionNode,
        context: RenderContext,
    ) -> Result<String, RenderError> {
        let children = self.render_children(&node.children, context)?;
        Ok(blocks([
            Self::heading(node, context).as_str(),
            format!("<details>\n<summary>{}</summary>", node.kind).as_str(),
            node.summary().unwrap_or(NO_DESCRIPTION),
            children.as_str(),
            "</details>",
        ]))
    }

    /// Interfaces made only of properties render their children as a table
    fn render_interface(
        &self,
        node: &ReflectionNode,
        context: RenderContext,
    ) -> Result<String, RenderError> {
        let children = if node.children.iter().all(|c| c.kind.is_property()) {
            let rows = self.render_children(&node.children, context.as_table_row())?;
            let mut table = String::from(TABLE_HEAD);
            if !rows.is_empty() {
                table.push_str(&rows);
                table.push('\n');
            }
            table.push_str(TABLE_TAIL);
            table
        } else {
            self.render_children(&node.children, context)?
        };

        // Interfaces fall back to nothing rather than NO_DESCRIPTION
        Ok(blocks([
            Self::heading(node, context).as_str(),
            format!("_{}_", node.kind).as_str(),
            node.summary().unwrap_or_default(),
            node.extended().unwrap_or_default(),
            children.as_str(),
        ]))
    }

    /// A table row inside a property-only interface, a bare heading elsewhere
    fn render_property(node: &ReflectionNode, table_row: bool, context: RenderContext) -> String {
        if table_row {
            format!(
                "<tr><td>{}*</td><td>{}</td></tr>",
                Self::display_name(node),
                node.summary().unwrap_or(NO_DESCRIPTION)
            )
        } else {
            let mut heading = Self::heading(node, context);
            heading.push('\n');
            heading
        }
    }

    fn render_children(
        &self,
        children: &[ReflectionNode],
        context: RenderContext,
    ) -> Result<String, RenderError> {
        let mut rendered = Vec::with_capacity(children.len());
        for child in children {
            let text = self.render(child, context)?;
            if !text.is_empty() {
                rendered.push(text);
            }
        }
        Ok(rendered.join("\n"))
    }

    fn heading(node: &ReflectionNode, context: RenderContext) -> String {
        format!("{} {}", "#".repeat(context.depth()), Self::display_name(node))
    }

    /// The node's name, or a placeholder identifying the node
    pub fn display_name(node: &ReflectionNode) -> Cow<'_, str> {
        match node.name.as_deref() {
            Some(name) if !name.is_empty() => Cow::Borrowed(name),
            _ => Cow::Owned(format!(
                "No name for reflection #{} ({})",
                node.id, node.kind
            )),
        }
    }
}

/// Join the non-empty parts with blank lines and end with a newline
fn blocks<'s>(parts: impl IntoIterator<Item = &'s str>) -> String {
    let mut output = parts
        .into_iter()
        .map(|part| part.trim_end_matches('\n'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    output.push('\n');
    output
}
