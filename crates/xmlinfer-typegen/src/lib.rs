//! Type inference and code generation from sample XML documents.
//!
//! `xmlinfer-typegen` walks one example document, infers a type per
//! distinct element, and renders those types for a target language with
//! field-to-tag mappings so the generated code can read and write the same
//! XML.
//!
//! # Architecture
//!
//! ```text
//! Document Source       Inference            IR           Output Backends
//! ───────────────     ─────────────     ─────────────     ───────────────
//! XML (roxmltree) ──> Node tree ──────> Schema ───────┬─> Java beans (Jackson)
//!                     + NameRegistry    (ir.rs)       ├─> Rust structs (serde)
//!                                                     └─> JSON (raw IR)
//! ```
//!
//! # Example
//!
//! ```
//! use xmlinfer_typegen::{infer_schema, input::parse_xml, ir::Type};
//!
//! let doc = parse_xml(r#"<root><a>x</a><a>y</a><b foo="1"/></root>"#).unwrap();
//! let schema = infer_schema(&doc);
//!
//! assert_eq!(schema.type_names(), vec!["Root", "A", "A1"]);
//! let root = &schema.definitions[0];
//! assert_eq!(root.fields[1].ty, Type::Ref("A1".into()));
//! ```
//!
//! # Writing Files
//!
//! ```ignore
//! use xmlinfer_typegen::{Emitter, RenderOptions, get_backend};
//!
//! let backend = get_backend("java").unwrap();
//! let emitter = Emitter::new(backend, "generated", RenderOptions::with_package("com.example"));
//! let report = emitter.emit_schema(&schema)?;
//! ```
//!
//! # Feature Flags
//!
//! - `backend-java` - Java beans with Jackson XML annotations
//! - `backend-rust` - Rust structs with serde (quick-xml conventions)
//! - `backend-json` - JSON dump of the IR

pub mod case;
pub mod emit;
pub mod infer;
pub mod input;
pub mod ir;
pub mod output;
pub mod registry;
pub mod traits;

// Re-export commonly used items
pub use emit::{EmitError, EmitReport, Emitter};
pub use infer::{NameRegistry, infer_schema, infer_schema_with};
pub use input::{Node, NodeKind, SourceError, parse_xml, read_xml};

// Re-export traits
pub use traits::{Backend, RenderOptions};

pub use output::resolve_names;

// Re-export registry functions
pub use registry::{backend_names, backends, get_backend, register_backend};

// Re-export backend structs
#[cfg(feature = "backend-java")]
pub use output::java::JavaBackend;

#[cfg(feature = "backend-rust")]
pub use output::rust::RustBackend;

#[cfg(feature = "backend-json")]
pub use output::json::JsonBackend;
