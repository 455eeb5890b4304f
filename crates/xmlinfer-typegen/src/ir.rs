//! Intermediate representation for inferred types.
//!
//! The walker in [`crate::infer`] produces this IR from a sample document;
//! output backends consume it without ever seeing the XML again.

use serde::{Deserialize, Serialize};

/// All types inferred from one document, in emission (pre-order) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub definitions: Vec<TypeDef>,
}

/// An inferred type, one per emitted element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Type name (upper-camel form of the disambiguated tag name).
    pub name: String,
    /// Tag name as it appears in the document.
    pub source_name: String,
    /// Fields in discovery order: elements, then attributes, then content.
    pub fields: Vec<Field>,
}

/// One member of a [`TypeDef`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Lower-camel field identifier.
    pub name: String,
    pub ty: Type,
    /// Case-preserving XML name the field maps back onto.
    pub source_name: String,
    pub kind: FieldKind,
}

/// Where a field's value comes from in the XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A child element.
    Element,
    /// An attribute on the owning element.
    Attribute,
    /// The owning element's own text.
    Content,
}

/// A field type. Leaves are opaque text; everything else refers to another type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Text,
    Ref(String),
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, def: TypeDef) {
        self.definitions.push(def);
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.definitions.iter().find(|d| d.name == name)
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.definitions.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl TypeDef {
    pub fn new(name: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_name: source_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Types this definition refers to, in field order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|f| match &f.ty {
            Type::Ref(name) => Some(name.as_str()),
            Type::Text => None,
        })
    }
}

impl Field {
    pub fn element(name: impl Into<String>, ty: Type, source_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            source_name: source_name.into(),
            kind: FieldKind::Element,
        }
    }

    pub fn attribute(name: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Type::Text,
            source_name: source_name.into(),
            kind: FieldKind::Attribute,
        }
    }

    pub fn content(name: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Type::Text,
            source_name: source_name.into(),
            kind: FieldKind::Content,
        }
    }

    pub fn is_attribute(&self) -> bool {
        self.kind == FieldKind::Attribute
    }
}
