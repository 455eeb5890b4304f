//! Rust struct generation.
//!
//! Follows the quick-xml serde conventions: attributes are renamed to
//! `@name`, element text to `$text`. Every type lands in its own file inside
//! a module directory; `mod.rs` declares the files and re-exports the types
//! so siblings can refer to each other through `super::`.

use super::sanitize_identifier;
use crate::ir::{FieldKind, Schema, Type, TypeDef};
use crate::traits::{Backend, RenderOptions};
use heck::ToSnakeCase;
use std::collections::HashSet;
use std::path::PathBuf;

/// Keywords that cannot be raw identifiers get a `_` suffix instead.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "try", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "typeof",
    "unsized", "virtual", "yield",
];

/// Rust backend for the registry.
pub struct RustBackend;

/// Static instance for registry.
pub static RUST_BACKEND: RustBackend = RustBackend;

impl Backend for RustBackend {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn language(&self) -> &'static str {
        "rust"
    }

    fn extension(&self) -> &'static str {
        "rs"
    }

    fn render(&self, def: &TypeDef, options: &RenderOptions) -> String {
        generate_rust_struct(def, options)
    }

    fn file_stem(&self, def: &TypeDef) -> String {
        module_name(&def.name)
    }

    /// Module and struct names fold differently, so both are keyed.
    fn name_keys(&self, type_name: &str) -> Vec<String> {
        vec![
            module_name(type_name),
            format!("struct {}", type_ident(type_name)),
        ]
    }

    fn reserved_keys(&self) -> &'static [&'static str] {
        &["mod"]
    }

    fn package_dir(&self, package: &str) -> PathBuf {
        let last = package.rsplit('.').next().unwrap_or_default();
        if last.is_empty() {
            PathBuf::new()
        } else {
            PathBuf::from(module_name(last))
        }
    }

    fn render_index(&self, schema: &Schema, _options: &RenderOptions) -> Option<(String, String)> {
        let mut out = String::from("//! Types inferred from a sample XML document.\n\n");
        for def in &schema.definitions {
            out.push_str(&format!("mod {};\n", module_name(&def.name)));
        }
        if !schema.is_empty() {
            out.push('\n');
        }
        for def in &schema.definitions {
            out.push_str(&format!(
                "pub use {}::{};\n",
                module_name(&def.name),
                type_ident(&def.name)
            ));
        }
        Some(("mod.rs".to_string(), out))
    }
}

/// Render a single struct as a module file.
pub fn generate_rust_struct(def: &TypeDef, options: &RenderOptions) -> String {
    let mut out = String::new();

    let serde_derives: Vec<&str> = options
        .derives
        .iter()
        .map(String::as_str)
        .filter(|d| *d == "Serialize" || *d == "Deserialize")
        .collect();
    let use_serde = !serde_derives.is_empty();

    if use_serde {
        if serde_derives.len() == 1 {
            out.push_str(&format!("use serde::{};\n", serde_derives[0]));
        } else {
            out.push_str(&format!("use serde::{{{}}};\n", serde_derives.join(", ")));
        }
    }

    let mut referenced = Vec::new();
    for name in def.references() {
        let ident = type_ident(name);
        if !referenced.contains(&ident) {
            referenced.push(ident);
        }
    }
    if !referenced.is_empty() {
        if use_serde {
            out.push('\n');
        }
        for ident in &referenced {
            out.push_str(&format!("use super::{};\n", ident));
        }
    }
    if !out.is_empty() {
        out.push('\n');
    }

    if !options.derives.is_empty() {
        out.push_str(&format!("#[derive({})]\n", options.derives.join(", ")));
    }
    if use_serde {
        out.push_str(&format!("#[serde(rename = \"{}\")]\n", def.source_name));
    }
    out.push_str(&format!("pub struct {} {{\n", type_ident(&def.name)));

    let mut used = HashSet::new();
    for field in &def.fields {
        let ident = unique_field_ident(&field.name, &mut used);
        if use_serde {
            let rename = match field.kind {
                FieldKind::Element if ident == field.source_name => None,
                FieldKind::Element => Some(field.source_name.clone()),
                FieldKind::Attribute => Some(format!("@{}", field.source_name)),
                FieldKind::Content => Some("$text".to_string()),
            };
            if let Some(rename) = rename {
                out.push_str(&format!("    #[serde(rename = \"{}\")]\n", rename));
            }
        }
        let ty = match &field.ty {
            Type::Text => "String".to_string(),
            Type::Ref(name) => type_ident(name),
        };
        out.push_str(&format!("    pub {}: {},\n", ident, ty));
    }

    out.push_str("}\n");
    out
}

fn type_ident(name: &str) -> String {
    let ident = sanitize_identifier(name);
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else {
        ident
    }
}

fn module_name(name: &str) -> String {
    let ident = sanitize_identifier(&name.to_snake_case());
    if KEYWORDS.contains(&ident.as_str()) || NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else {
        ident
    }
}

fn field_ident(name: &str) -> String {
    let ident = sanitize_identifier(&name.to_snake_case());
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else if KEYWORDS.contains(&ident.as_str()) {
        format!("r#{}", ident)
    } else {
        ident
    }
}

/// Snake-casing can fold distinct names together (`userName`, `user_name`).
fn unique_field_ident(name: &str, used: &mut HashSet<String>) -> String {
    let base = field_ident(name);
    let mut ident = base.clone();
    let mut n = 1;
    while !used.insert(ident.clone()) {
        ident = format!("{}_{}", base, n);
        n += 1;
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Field;

    #[test]
    fn renders_quick_xml_struct() {
        let def = TypeDef::new("Root", "root")
            .with_field(Field::element("a1", Type::Ref("A1".into()), "a"))
            .with_field(Field::element("userName", Type::Text, "userName"))
            .with_field(Field::attribute("foo", "foo"));
        let out = generate_rust_struct(&def, &RenderOptions::default());
        insta::assert_snapshot!(out, @r#"
use serde::{Serialize, Deserialize};

use super::A1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "root")]
pub struct Root {
    #[serde(rename = "a")]
    pub a1: A1,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "@foo")]
    pub foo: String,
}
"#);
    }

    #[test]
    fn content_and_keywords() {
        let def = TypeDef::new("Type", "type")
            .with_field(Field::attribute("type", "type"))
            .with_field(Field::content("self", "self"));
        let out = generate_rust_struct(&def, &RenderOptions::default());

        assert!(out.contains("    #[serde(rename = \"@type\")]\n    pub r#type: String,\n"));
        assert!(out.contains("    #[serde(rename = \"$text\")]\n    pub self_: String,\n"));
        assert!(out.contains("pub struct Type {"));
        assert_eq!(RUST_BACKEND.file_stem(&def), "type_");
    }

    #[test]
    fn without_serde_derives() {
        let def = TypeDef::new("Leaf", "leaf").with_field(Field::attribute("id", "id"));
        let options = RenderOptions {
            derives: vec!["Debug".to_string()],
            ..Default::default()
        };
        let out = generate_rust_struct(&def, &options);
        assert!(!out.contains("serde"));
        assert!(out.starts_with("#[derive(Debug)]\npub struct Leaf {\n"));
    }

    #[test]
    fn folded_field_names_stay_unique() {
        let def = TypeDef::new("Root", "root")
            .with_field(Field::element("userName", Type::Text, "userName"))
            .with_field(Field::element("user_name", Type::Text, "user_name"));
        let out = generate_rust_struct(&def, &RenderOptions::default());
        assert!(out.contains("pub user_name: String,"));
        assert!(out.contains("pub user_name_1: String,"));
    }

    #[test]
    fn index_declares_and_reexports() {
        let mut schema = Schema::new();
        schema.add(TypeDef::new("Root", "root"));
        schema.add(TypeDef::new("UserName", "userName"));

        let (file, index) = RUST_BACKEND
            .render_index(&schema, &RenderOptions::default())
            .unwrap();
        assert_eq!(file, "mod.rs");
        assert!(index.contains("mod root;\nmod user_name;\n"));
        assert!(index.contains("pub use root::Root;\npub use user_name::UserName;\n"));
    }

    #[test]
    fn folded_module_names_are_kept_apart() {
        let schema = crate::infer_schema(
            &crate::parse_xml("<root><fooBar><x/></fooBar><foo_bar><y/></foo_bar></root>").unwrap(),
        );
        assert_eq!(schema.type_names(), vec!["Root", "FooBar", "Foo_bar"]);

        let all = RUST_BACKEND.render_all(&schema, &RenderOptions::default());
        let (_, index) = all.split_once("// mod.rs\n").unwrap();
        assert_eq!(index.matches("mod foo_bar;").count(), 1);
        assert!(index.contains("mod foo_bar1;\n"));
        assert!(index.contains("pub use foo_bar1::Foo_bar1;\n"));

        let resolved = crate::resolve_names(&RUST_BACKEND, &schema);
        let root = generate_rust_struct(&resolved.definitions[0], &RenderOptions::default());
        assert!(root.contains("use super::Foo_bar1;\n"));
        assert!(root.contains("    #[serde(rename = \"foo_bar\")]\n    pub foo_bar_1: Foo_bar1,\n"));
    }

    #[test]
    fn package_dir_uses_last_segment() {
        assert_eq!(
            RUST_BACKEND.package_dir("com.example.Model"),
            PathBuf::from("model")
        );
        assert_eq!(RUST_BACKEND.package_dir(""), PathBuf::new());
    }
}
