//! Document sources.
//!
//! Each source produces an owned [`Node`] tree for the walker in
//! [`crate::infer`].

mod node;
mod xml;

pub use node::{Node, NodeKind};
pub use xml::{SourceError, parse_xml, parse_xml_bytes, read_xml};
