//! Java bean generation.
//!
//! One public class per type, with private fields mapped back onto the XML
//! vocabulary through Jackson's XML annotations:
//!
//! - element fields: `@JacksonXmlProperty(localName = "...")`
//! - attribute fields: `@JacksonXmlProperty(isAttribute = true, localName = "...")`
//! - content fields: `@JacksonXmlText`

use super::sanitize_identifier;
use crate::case::upper_camel;
use crate::ir::{Field, FieldKind, Type, TypeDef};
use crate::traits::{Backend, RenderOptions};
use std::collections::HashSet;

const PROPERTY: &str = "com.fasterxml.jackson.dataformat.xml.annotation.JacksonXmlProperty";
const ROOT_ELEMENT: &str = "com.fasterxml.jackson.dataformat.xml.annotation.JacksonXmlRootElement";
const TEXT: &str = "com.fasterxml.jackson.dataformat.xml.annotation.JacksonXmlText";

const KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// `java.lang` types the generated classes refer to without importing.
const IMPLICIT_TYPES: &[&str] = &["String", "Object"];

/// Java backend for the registry.
pub struct JavaBackend;

/// Static instance for registry.
pub static JAVA_BACKEND: JavaBackend = JavaBackend;

impl Backend for JavaBackend {
    fn name(&self) -> &'static str {
        "java"
    }

    fn language(&self) -> &'static str {
        "java"
    }

    fn extension(&self) -> &'static str {
        "java"
    }

    fn render(&self, def: &TypeDef, options: &RenderOptions) -> String {
        generate_java_class(def, options)
    }

    fn file_stem(&self, def: &TypeDef) -> String {
        class_ident(&def.name)
    }

    fn name_keys(&self, type_name: &str) -> Vec<String> {
        vec![class_ident(type_name).to_lowercase()]
    }
}

/// Render a single class, package declaration and imports included.
pub fn generate_java_class(def: &TypeDef, options: &RenderOptions) -> String {
    let mut out = String::new();

    if !options.package.is_empty() {
        out.push_str(&format!("package {};\n\n", options.package));
    }

    let mut imports = vec![ROOT_ELEMENT];
    if def.fields.iter().any(|f| f.kind != FieldKind::Content) {
        imports.push(PROPERTY);
    }
    if def.fields.iter().any(|f| f.kind == FieldKind::Content) {
        imports.push(TEXT);
    }
    imports.sort_unstable();
    for import in imports {
        out.push_str(&format!("import {};\n", import));
    }
    out.push('\n');

    out.push_str(&format!(
        "@JacksonXmlRootElement(localName = \"{}\")\n",
        def.source_name
    ));
    out.push_str(&format!("public class {} {{\n", class_ident(&def.name)));

    let mut used = HashSet::new();
    let fields: Vec<(&Field, String)> = def
        .fields
        .iter()
        .map(|f| (f, unique_field_ident(&f.name, &mut used)))
        .collect();

    let mut members: Vec<String> = fields
        .iter()
        .map(|(field, ident)| field_decl(field, ident))
        .collect();
    if options.accessors {
        for (field, ident) in &fields {
            members.push(getter(field, ident));
            members.push(setter(field, ident));
        }
    }
    out.push_str(&members.join("\n"));

    out.push_str("}\n");
    out
}

fn field_decl(field: &Field, ident: &str) -> String {
    let annotation = match field.kind {
        FieldKind::Element => format!("@JacksonXmlProperty(localName = \"{}\")", field.source_name),
        FieldKind::Attribute => format!(
            "@JacksonXmlProperty(isAttribute = true, localName = \"{}\")",
            field.source_name
        ),
        FieldKind::Content => "@JacksonXmlText".to_string(),
    };
    format!(
        "    {}\n    private {} {};\n",
        annotation,
        java_type(&field.ty),
        ident
    )
}

fn getter(field: &Field, ident: &str) -> String {
    format!(
        "    public {} get{}() {{\n        return this.{};\n    }}\n",
        java_type(&field.ty),
        upper_camel(ident),
        ident
    )
}

fn setter(field: &Field, ident: &str) -> String {
    format!(
        "    public void set{}({} {}) {{\n        this.{} = {};\n    }}\n",
        upper_camel(ident),
        java_type(&field.ty),
        ident,
        ident,
        ident
    )
}

fn java_type(ty: &Type) -> String {
    match ty {
        Type::Text => "String".to_string(),
        Type::Ref(name) => class_ident(name),
    }
}

/// Class names additionally avoid shadowing `java.lang` types.
fn class_ident(name: &str) -> String {
    let ident = java_ident(name);
    if IMPLICIT_TYPES.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else {
        ident
    }
}

/// An attribute can share its name with a child element or the content field.
fn unique_field_ident(name: &str, used: &mut HashSet<String>) -> String {
    let base = java_ident(name);
    let mut ident = base.clone();
    let mut n = 1;
    while !used.insert(ident.clone()) {
        ident = format!("{}_{}", base, n);
        n += 1;
    }
    ident
}

fn java_ident(name: &str) -> String {
    let ident = sanitize_identifier(name);
    if KEYWORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else {
        ident
    }
}
