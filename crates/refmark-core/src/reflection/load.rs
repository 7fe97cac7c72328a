//! Loading reflection documents from TypeDoc JSON output

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::types::Document;

/// Errors that can occur when loading a reflection document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read reflection document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse reflection document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Document {
    /// Load a document from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON object.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let document = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            children = document.children.len(),
            groups = document.groups.len(),
            "loaded reflection document"
        );
        Ok(document)
    }

    /// Load a document from any reader, such as stdin.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, DocumentError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content)
    }

    /// Parse a document from a JSON string.
    ///
    /// Missing or `null` top-level `children` and `groups` are read as empty.
    /// Fields the renderer does not use are ignored.
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::reflection::ReflectionKind;

    #[test]
    fn parse_typedoc_project() {
        let json = r#"{
            "id": 0,
            "name": "calculator",
            "kind": 1,
            "flags": {},
            "originalName": "",
            "children": [
                { "id": 1, "name": "Calculator", "kindString": "Class", "children": [] }
            ],
            "groups": [
                { "title": "Classes", "kind": 128, "children": [1] }
            ],
            "sources": [{ "fileName": "index.ts", "line": 1 }]
        }"#;
        let document = Document::parse(json).unwrap();
        assert_eq!(document.children.len(), 1);
        assert_eq!(document.children[0].kind, ReflectionKind::Class);
        assert_eq!(document.groups[0].member_ids, vec![1]);
    }

    #[test]
    fn parse_missing_top_level_arrays() {
        let document = Document::parse(r#"{ "name": "empty" }"#).unwrap();
        assert!(document.children.is_empty());
        assert!(document.groups.is_empty());

        let document = Document::parse(r#"{ "children": null, "groups": null }"#).unwrap();
        assert_eq!(document, Document::default());
    }

    #[test]
    fn absent_document_is_an_error() {
        assert!(matches!(
            Document::parse("null"),
            Err(DocumentError::Parse(_))
        ));
        assert!(matches!(Document::parse(""), Err(DocumentError::Parse(_))));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "groups": [{{ "title": "Functions", "children": [] }}] }}"#).unwrap();

        let document = Document::from_path(file.path()).unwrap();
        assert_eq!(document.groups[0].title, "Functions");
    }

    #[test]
    fn from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::from_path(dir.path().join("out.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }

    #[test]
    fn from_reader_reads_all() {
        let document = Document::from_reader(r#"{ "children": [] }"#.as_bytes()).unwrap();
        assert!(document.children.is_empty());
    }
}
