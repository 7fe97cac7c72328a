//! Assembling rendered groups into output documents

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::context::RenderContext;
use super::error::RenderError;
use super::group::{GroupResolver, UNTITLED_GROUP};
use super::markdown::MarkdownRenderer;
use crate::config::RenderConfig;
use crate::reflection::{Document, Group, NodeIndex};

/// One rendered group: its raw title and its markdown body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGroup {
    /// The group's title as declared (may be empty)
    pub title: String,
    /// Markdown body, starting with the group heading
    pub body: String,
}

/// Which rendered groups reach the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emit {
    /// Only the first group's body
    #[default]
    First,
    /// Every group's body, in document order
    All,
}

impl Emit {
    /// Returns the policy as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Emit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Emit`] policy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown emit policy '{0}', expected one of: first, all")]
pub struct ParseEmitError(pub String);

impl FromStr for Emit {
    type Err = ParseEmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "all" => Ok(Self::All),
            _ => Err(ParseEmitError(s.to_string())),
        }
    }
}

/// Renders every group of a document
#[derive(Debug, Clone)]
pub struct OutputAssembler {
    renderer: MarkdownRenderer,
    untitled_group: String,
}

impl Default for OutputAssembler {
    fn default() -> Self {
        Self::new(MarkdownRenderer::new())
    }
}

impl OutputAssembler {
    /// Create an assembler around a renderer
    pub fn new(renderer: MarkdownRenderer) -> Self {
        Self {
            renderer,
            untitled_group: UNTITLED_GROUP.to_string(),
        }
    }

    /// Create an assembler from render settings
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(MarkdownRenderer::with_max_depth(config.max_depth))
            .with_untitled_group(config.untitled_group.clone())
    }

    /// Use a different heading for groups without a title
    pub fn with_untitled_group(mut self, untitled_group: impl Into<String>) -> Self {
        self.untitled_group = untitled_group.into();
        self
    }

    /// Render one `(title, body)` pair per group, in document order
    ///
    /// # Errors
    ///
    /// Returns an error if any member exceeds the renderer's depth limit.
    #[tracing::instrument(skip_all, fields(groups = document.groups.len()))]
    pub fn assemble(&self, document: &Document) -> Result<Vec<RenderedGroup>, RenderError> {
        let index = NodeIndex::build(document);
        let resolver = GroupResolver::new(&index).with_untitled_group(&self.untitled_group);

        document
            .groups
            .iter()
            .map(|group| self.render_group(&resolver, group))
            .collect()
    }

    fn render_group(
        &self,
        resolver: &GroupResolver<'_>,
        group: &Group,
    ) -> Result<RenderedGroup, RenderError> {
        let members = resolver.resolve_group(group);
        let mut rendered = Vec::with_capacity(members.len());
        for member in members {
            rendered.push(self.renderer.render(member, RenderContext::root())?);
        }

        tracing::debug!(
            title = %group.title,
            declared = group.member_ids.len(),
            rendered = rendered.len(),
            "rendered group"
        );

        Ok(RenderedGroup {
            title: group.title.clone(),
            body: format!(
                "# {}\n\n{}",
                resolver.heading_title(group),
                rendered.join("\n")
            ),
        })
    }
}

/// Pick the text that goes to the output sink
///
/// With [`Emit::First`] only the first group's body is returned and the rest
/// are discarded. With [`Emit::All`] every body is returned, separated by a
/// blank line. No groups produce empty output.
pub fn select_output(groups: &[RenderedGroup], emit: Emit) -> String {
    match emit {
        Emit::First => groups.first().map(|g| g.body.clone()).unwrap_or_default(),
        Emit::All => groups
            .iter()
            .map(|g| g.body.trim_end_matches('\n'))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}
