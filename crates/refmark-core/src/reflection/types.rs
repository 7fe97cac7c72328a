//! Types for representing a loaded reflection document

use serde::{Deserialize, Deserializer};

use super::kind::ReflectionKind;

/// Identifier of a reflection, unique within a document
pub type ReflectionId = i64;

/// Documentation attached to a reflection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Short summary text
    pub summary: Option<String>,
    /// Longer text following the summary
    pub extended: Option<String>,
}

impl Comment {
    /// Create a comment with only a summary
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            extended: None,
        }
    }

    /// Set the extended text
    pub fn with_extended(mut self, extended: impl Into<String>) -> Self {
        self.extended = Some(extended.into());
        self
    }

    /// Check if the comment carries no text at all
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.extended.is_none()
    }
}

/// A documented program element and its owned children
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawReflection")]
pub struct ReflectionNode {
    /// Document-wide identifier
    pub id: ReflectionId,
    /// Display name
    pub name: Option<String>,
    /// Kind of program element
    pub kind: ReflectionKind,
    /// Attached documentation
    pub comment: Option<Comment>,
    /// Child reflections, in declaration order
    pub children: Vec<ReflectionNode>,
}

impl ReflectionNode {
    /// Create a new reflection without name, comment or children
    pub fn new(id: ReflectionId, kind: ReflectionKind) -> Self {
        Self {
            id,
            name: None,
            kind,
            comment: None,
            children: Vec::new(),
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the documentation
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Set a summary-only comment
    pub fn with_summary(self, summary: impl Into<String>) -> Self {
        self.with_comment(Comment::new(summary))
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: ReflectionNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child reflection
    pub fn add_child(&mut self, child: ReflectionNode) {
        self.children.push(child);
    }

    /// Summary text, if present and not blank
    pub fn summary(&self) -> Option<&str> {
        self.comment
            .as_ref()
            .and_then(|c| c.summary.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// Extended text, if present and not blank
    pub fn extended(&self) -> Option<&str> {
        self.comment
            .as_ref()
            .and_then(|c| c.extended.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// A titled, ordered view over some of the document's reflections
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Group {
    /// Group title, may be empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Ids of the member reflections, in display order
    #[serde(
        default,
        rename = "memberIds",
        alias = "children",
        deserialize_with = "null_as_default"
    )]
    pub member_ids: Vec<ReflectionId>,
}

impl Group {
    /// Create a new group
    pub fn new(title: impl Into<String>, member_ids: Vec<ReflectionId>) -> Self {
        Self {
            title: title.into(),
            member_ids,
        }
    }
}

/// A complete reflection document: the node tree plus its groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Document {
    /// Top-level reflections
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<ReflectionNode>,
    /// Export groups, in output order
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<Group>,
}

impl Document {
    /// Create a new document
    pub fn new(children: Vec<ReflectionNode>, groups: Vec<Group>) -> Self {
        Self { children, groups }
    }
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reflection as it appears in TypeDoc JSON
#[derive(Deserialize)]
struct RawReflection {
    id: ReflectionId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "kindString")]
    kind_string: Option<String>,
    #[serde(default)]
    kind: Option<serde_json::Value>,
    #[serde(default)]
    comment: Option<RawComment>,
    #[serde(default, deserialize_with = "null_as_default")]
    signatures: Vec<RawSignature>,
    #[serde(default, deserialize_with = "null_as_default")]
    children: Vec<ReflectionNode>,
}

impl From<RawReflection> for ReflectionNode {
    fn from(raw: RawReflection) -> Self {
        let kind = raw
            .kind_string
            .as_deref()
            .map(ReflectionKind::from_label)
            .or_else(|| {
                raw.kind
                    .as_ref()
                    .and_then(serde_json::Value::as_u64)
                    .map(ReflectionKind::from_flag)
            })
            .unwrap_or_default();

        // Callables document themselves on their signatures
        let comment = raw
            .comment
            .or_else(|| raw.signatures.into_iter().find_map(|s| s.comment))
            .map(Comment::from)
            .filter(|c| !c.is_empty());

        Self {
            id: raw.id,
            name: raw.name,
            kind,
            comment,
            children: raw.children,
        }
    }
}

#[derive(Deserialize)]
struct RawSignature {
    #[serde(default)]
    comment: Option<RawComment>,
}

#[derive(Deserialize)]
struct RawComment {
    #[serde(default, alias = "shortText")]
    summary: Option<CommentText>,
    #[serde(default, alias = "text")]
    extended: Option<CommentText>,
}

impl From<RawComment> for Comment {
    fn from(raw: RawComment) -> Self {
        Self {
            summary: raw.summary.and_then(CommentText::into_text),
            extended: raw.extended.and_then(CommentText::into_text),
        }
    }
}

/// Comment text: a plain string in older TypeDoc output, display parts in newer
#[derive(Deserialize)]
#[serde(untagged)]
enum CommentText {
    Plain(String),
    Parts(Vec<CommentPart>),
}

#[derive(Deserialize)]
struct CommentPart {
    #[serde(default)]
    text: String,
}

impl CommentText {
    fn into_text(self) -> Option<String> {
        let text = match self {
            Self::Plain(text) => text,
            Self::Parts(parts) => parts.into_iter().map(|p| p.text).collect(),
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
