//! Reflection kinds and their TypeDoc encodings

use std::fmt;

/// Label used when a reflection carries no usable kind information
const UNKNOWN_LABEL: &str = "Unknown";

/// Kind of a reflection node
///
/// Only the kinds the renderer treats specially get their own variant. Every
/// other TypeDoc kind is kept as [`ReflectionKind::Other`] with its label so
/// it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReflectionKind {
    Class,
    Interface,
    Method,
    Constructor,
    Property,
    Other(String),
}

impl ReflectionKind {
    /// Parse a TypeDoc `kindString` label
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Class" => Self::Class,
            "Interface" => Self::Interface,
            "Method" => Self::Method,
            "Constructor" => Self::Constructor,
            "Property" => Self::Property,
            "" => Self::Other(UNKNOWN_LABEL.to_string()),
            other => Self::Other(other.to_string()),
        }
    }

    /// Map a TypeDoc `ReflectionKind` bit flag (the numeric `kind` field)
    pub fn from_flag(flag: u64) -> Self {
        let label = match flag {
            128 => return Self::Class,
            256 => return Self::Interface,
            512 => return Self::Constructor,
            1024 => return Self::Property,
            2048 => return Self::Method,
            1 => "Project",
            2 => "Module",
            4 => "Namespace",
            8 => "Enumeration",
            16 => "Enumeration Member",
            32 => "Variable",
            64 => "Function",
            4096 => "Call signature",
            8192 => "Index signature",
            16_384 => "Constructor signature",
            32_768 => "Parameter",
            65_536 => "Type literal",
            131_072 => "Type parameter",
            262_144 => "Accessor",
            524_288 => "Get signature",
            1_048_576 => "Set signature",
            2_097_152 => "Type alias",
            4_194_304 => "Reference",
            _ => UNKNOWN_LABEL,
        };
        Self::Other(label.to_string())
    }

    /// Get the display label for the kind
    pub fn label(&self) -> &str {
        match self {
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::Method => "Method",
            Self::Constructor => "Constructor",
            Self::Property => "Property",
            Self::Other(label) => label,
        }
    }

    /// Whether this kind renders as a table row inside a property-only interface
    pub fn is_property(&self) -> bool {
        matches!(self, Self::Property)
    }
}

impl Default for ReflectionKind {
    fn default() -> Self {
        Self::Other(UNKNOWN_LABEL.to_string())
    }
}

impl fmt::Display for ReflectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
