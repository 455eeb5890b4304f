//! XML document source.
//!
//! Parses a sample document with `roxmltree` and copies it into an owned
//! [`Node`] tree. Whitespace-only text is kept, so an element that contains
//! nothing but a line break still has a child node.

use super::node::{Node, NodeKind};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("malformed XML: {0}")]
    Malformed(#[from] roxmltree::Error),
}

/// Parse XML text into a document node.
pub fn parse_xml(text: &str) -> Result<Node, SourceError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    Ok(convert(doc.root()))
}

/// Parse a UTF-8 byte buffer.
pub fn parse_xml_bytes(bytes: &[u8]) -> Result<Node, SourceError> {
    let text = std::str::from_utf8(bytes)?;
    parse_xml(text)
}

/// Read and parse a file; `-` reads stdin.
pub fn read_xml(path: &Path) -> Result<Node, SourceError> {
    let read_err = |source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    };

    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(read_err)?;
        buf
    } else {
        std::fs::read(path).map_err(read_err)?
    };

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read sample document");
    parse_xml_bytes(&bytes)
}

fn convert(node: roxmltree::Node<'_, '_>) -> Node {
    match node.node_type() {
        roxmltree::NodeType::Root => Node::document(node.children().map(convert).collect()),
        roxmltree::NodeType::Element => Node {
            name: node.tag_name().name().to_string(),
            kind: NodeKind::Element,
            children: node.children().map(convert).collect(),
            attributes: node
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
            text: None,
        },
        roxmltree::NodeType::Text => Node::text(node.text().unwrap_or_default()),
        roxmltree::NodeType::Comment => Node::comment(),
        roxmltree::NodeType::PI => Node::processing_instruction(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_document() {
        let doc = parse_xml(r#"<root id="1"><a>x</a><b foo="2"/></root>"#).unwrap();
        assert_eq!(doc.kind, NodeKind::Document);

        let root = doc.element_children().next().unwrap();
        assert_eq!(root.name, "root");
        assert_eq!(root.attributes, vec![("id".to_string(), "1".to_string())]);

        let children: Vec<_> = root.element_children().map(|c| c.name.as_str()).collect();
        assert_eq!(children, vec!["a", "b"]);

        let a = &root.children[0];
        assert!(a.has_children());
        assert_eq!(a.own_text(), "x");

        let b = &root.children[1];
        assert!(!b.has_children());
        assert_eq!(b.attributes[0].0, "foo");
    }

    #[test]
    fn keeps_whitespace_and_comments() {
        let doc = parse_xml("<root>\n  <!-- note -->\n</root>").unwrap();
        let root = doc.element_children().next().unwrap();
        let kinds: Vec<_> = root.children.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Text, NodeKind::Comment, NodeKind::Text]
        );
    }

    #[test]
    fn top_level_comments_are_not_elements() {
        let doc = parse_xml("<?xml version=\"1.0\"?><!-- c --><root/>").unwrap();
        assert_eq!(doc.element_children().count(), 1);
        assert!(doc.children.iter().any(|c| c.kind == NodeKind::Comment));
    }

    #[test]
    fn reject_malformed() {
        let err = parse_xml("<root><a></root>").unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn reject_invalid_utf8() {
        let err = parse_xml_bytes(&[b'<', 0xff, b'/', b'>']).unwrap_err();
        assert!(matches!(err, SourceError::Encoding(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_xml(Path::new("/nonexistent/sample.xml")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/sample.xml"));
    }
}
