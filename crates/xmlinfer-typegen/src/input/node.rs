//! Owned document tree consumed by the inference walker.

/// Kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Holder of the top-level node list.
    Document,
    Element,
    Text,
    Comment,
    ProcessingInstruction,
}

/// A position in a parsed document.
///
/// Non-element nodes carry synthetic `#`-prefixed names (`#text`,
/// `#comment`, ...) and never contribute fields, but they still count as
/// children of their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<Node>,
    /// Attribute name/value pairs in document order.
    pub attributes: Vec<(String, String)>,
    /// Character data, for text nodes only.
    pub text: Option<String>,
}

impl Node {
    pub fn document(children: Vec<Node>) -> Self {
        Self {
            name: "#document".to_string(),
            kind: NodeKind::Document,
            children,
            attributes: Vec::new(),
            text: None,
        }
    }

    pub fn element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Element,
            children: Vec::new(),
            attributes: Vec::new(),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            name: "#text".to_string(),
            kind: NodeKind::Text,
            children: Vec::new(),
            attributes: Vec::new(),
            text: Some(text.into()),
        }
    }

    pub fn comment() -> Self {
        Self {
            name: "#comment".to_string(),
            kind: NodeKind::Comment,
            children: Vec::new(),
            attributes: Vec::new(),
            text: None,
        }
    }

    pub fn processing_instruction() -> Self {
        Self {
            name: "#pi".to_string(),
            kind: NodeKind::ProcessingInstruction,
            children: Vec::new(),
            attributes: Vec::new(),
            text: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::text(text))
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// True if the node has any child node at all, text and comments included.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| c.is_element())
    }

    /// Concatenated text of the direct text children.
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| c.text.as_deref())
            .collect()
    }

    /// True if any direct text child holds something other than whitespace.
    pub fn has_text_content(&self) -> bool {
        self.children
            .iter()
            .filter_map(|c| c.text.as_deref())
            .any(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_children_count_as_children() {
        let node = Node::element("a").with_text("x");
        assert!(node.has_children());
        assert_eq!(node.element_children().count(), 0);
        assert!(node.has_text_content());
        assert_eq!(node.own_text(), "x");
    }

    #[test]
    fn whitespace_is_not_content() {
        let node = Node::element("a")
            .with_text("\n  ")
            .with_child(Node::element("b"))
            .with_text("\n");
        assert!(!node.has_text_content());
        assert_eq!(node.element_children().count(), 1);
    }

    #[test]
    fn synthetic_names() {
        assert_eq!(Node::text("x").name, "#text");
        assert_eq!(Node::comment().name, "#comment");
        assert_eq!(Node::document(vec![]).kind, NodeKind::Document);
    }
}
