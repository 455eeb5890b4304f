//! Schema inference from a sample document.
//!
//! The walker runs in two passes over the element tree:
//!
//! 1. **Naming**: every element, in document pre-order, gets a disambiguated
//!    name from the [`NameRegistry`]. The counter is document-global, so the
//!    second `<item>` anywhere becomes `item1`, the third `item2`.
//! 2. **Descriptors**: every composite element (one with child nodes of any
//!    kind) becomes a [`TypeDef`] whose fields point at the names assigned in
//!    pass 1. Definitions come out in pre-order, parents before descendants.
//!
//! Leaf elements (no child nodes) only become their own type when they sit
//! directly under the traversal root; below that they are inlined as text
//! fields of their parent.

use crate::case::{lower_camel, upper_camel};
use crate::input::Node;
use crate::ir::{Field, Schema, Type, TypeDef};
use std::collections::{HashMap, HashSet};

/// Tracks how often each tag name has been seen during one run.
///
/// Start every document from a fresh (or [`reset`](Self::reset)) registry;
/// reusing one carries suffixes over from the previous run.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `tag` and return its disambiguated name.
    ///
    /// The first occurrence keeps the tag as-is and records a count of 0;
    /// each later occurrence increments the count and appends it. A candidate
    /// whose type name (upper-camel form) was already issued, e.g. a literal
    /// `<item1>` after two `<item>`s, is bumped until it is free.
    pub fn assign(&mut self, tag: &str) -> String {
        loop {
            let candidate = match self.counts.get_mut(tag) {
                Some(count) => {
                    *count += 1;
                    format!("{}{}", tag, count)
                }
                None => {
                    self.counts.insert(tag.to_string(), 0);
                    tag.to_string()
                }
            };

            if self.issued.insert(upper_camel(&candidate)) {
                return candidate;
            }
            tracing::warn!(tag, candidate = %candidate, "type name already taken, bumping suffix");
        }
    }

    /// Current count for `tag`, or `None` if it has not been seen.
    pub fn seen(&self, tag: &str) -> Option<usize> {
        self.counts.get(tag).copied()
    }

    pub fn reset(&mut self) {
        self.counts.clear();
        self.issued.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Infer all types below `root` using a fresh registry.
///
/// `root` is usually the document node; its element children are the
/// top-level elements.
pub fn infer_schema(root: &Node) -> Schema {
    let mut registry = NameRegistry::new();
    infer_schema_with(root, &mut registry)
}

/// Infer all types below `root`, drawing names from `registry`.
pub fn infer_schema_with(root: &Node, registry: &mut NameRegistry) -> Schema {
    let named = name_elements(root, registry);
    let mut schema = Schema::new();

    for element in &named {
        if element.node.has_children() {
            collect_composite(element, &mut schema);
        } else {
            schema.add(leaf_type(element));
        }
    }

    tracing::debug!(types = schema.len(), "inferred schema");
    schema
}

/// An element paired with the name pass 1 gave it.
struct Named<'a> {
    node: &'a Node,
    name: String,
    children: Vec<Named<'a>>,
}

fn name_elements<'a>(parent: &'a Node, registry: &mut NameRegistry) -> Vec<Named<'a>> {
    parent
        .element_children()
        .map(|node| {
            let name = registry.assign(&node.name);
            tracing::debug!(tag = %node.name, name = %name, "named element");
            let children = name_elements(node, registry);
            Named {
                node,
                name,
                children,
            }
        })
        .collect()
}

fn collect_composite(element: &Named<'_>, schema: &mut Schema) {
    schema.add(composite_type(element));
    for child in &element.children {
        if child.node.has_children() {
            collect_composite(child, schema);
        }
    }
}

fn composite_type(element: &Named<'_>) -> TypeDef {
    let mut def = TypeDef::new(upper_camel(&element.name), &element.node.name);

    for child in &element.children {
        let ty = if child.node.has_children() {
            Type::Ref(upper_camel(&child.name))
        } else {
            Type::Text
        };
        def.fields
            .push(Field::element(lower_camel(&child.name), ty, &child.node.name));
    }

    push_attributes(&mut def, element.node);

    // Text-only elements keep their value; mixed content is not modelled.
    if element.children.is_empty() && element.node.has_text_content() {
        def.fields.push(content_field(element.node));
    }

    def
}

fn leaf_type(element: &Named<'_>) -> TypeDef {
    let mut def = TypeDef::new(upper_camel(&element.name), &element.node.name);
    push_attributes(&mut def, element.node);
    def.fields.push(content_field(element.node));
    def
}

fn push_attributes(def: &mut TypeDef, node: &Node) {
    for (name, _) in &node.attributes {
        def.fields.push(Field::attribute(lower_camel(name), name));
    }
}

fn content_field(node: &Node) -> Field {
    Field::content(lower_camel(&node.name), &node.name)
}
